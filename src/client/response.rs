//! Wire-level response parsing.
//!
//! Reads the status line, feeds each header line through
//! [`Response::set_header`] (which drives `Set-Cookie` accumulation), and
//! buffers the body according to its framing. Header parsing is
//! permissive: blank and colon-less lines are skipped, values are trimmed.
//! Only a garbled status line or a broken chunk length fails the call.

use std::io::{BufRead, BufReader, Read};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::request::Method;
use crate::response::Response;

const BODY_PREVIEW_SIZE: usize = 200;

/// Reads and parses one HTTP/1.1 response from the stream.
pub(crate) fn read_response<R: Read>(stream: R, method: Method) -> Result<Response> {
    let mut reader = BufReader::new(stream);

    let status_line = read_line(&mut reader)?
        .ok_or_else(|| Error::network("connection closed before status line"))?;
    let mut response = parse_status_line(&status_line)?;

    loop {
        let line = read_line(&mut reader)?
            .ok_or_else(|| Error::network("connection closed inside header block"))?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        match line.split_once(':') {
            Some((key, value)) => response.set_header(key.trim(), value.trim()),
            None => warn!(line, "skipping malformed header line"),
        }
    }

    let body = read_body(&mut reader, &response, method)?;
    if !body.is_empty() {
        let preview_len = body.len().min(BODY_PREVIEW_SIZE);
        debug!(
            body_length = body.len(),
            body_preview = %String::from_utf8_lossy(&body[..preview_len]),
            "body buffered"
        );
    }
    response.set_body(body);

    Ok(response)
}

/// Parses `HTTP/1.1 200 OK` into an empty [`Response`].
fn parse_status_line(line: &str) -> Result<Response> {
    let mut parts = line.trim().splitn(3, ' ');
    let _version = parts.next().unwrap_or("");
    let code = parts
        .next()
        .and_then(|s| s.parse::<u16>().ok())
        .ok_or_else(|| Error::invalid_request(format!("malformed status line: {line:?}")))?;
    let message = parts.next().unwrap_or("").trim().to_string();
    Ok(Response::new(code, message))
}

/// Buffers the body according to the response's framing.
///
/// HEAD responses and 204/304 statuses carry no body. Otherwise chunked
/// transfer coding wins over `Content-Length`, and with neither present
/// the body runs to EOF (the request always carries `Connection: close`,
/// so EOF is a well-defined terminator).
fn read_body<R: BufRead>(reader: &mut R, response: &Response, method: Method) -> Result<Vec<u8>> {
    if method == Method::Head || matches!(response.status_code(), 204 | 304) {
        return Ok(Vec::new());
    }

    let chunked = response
        .header("transfer-encoding")
        .is_some_and(|v| v.to_ascii_lowercase().contains("chunked"));
    if chunked {
        return read_chunked_body(reader);
    }

    if let Some(length) = response
        .header("content-length")
        .and_then(|v| v.trim().parse::<u64>().ok())
    {
        return read_sized_body(reader, length);
    }

    let mut body = Vec::new();
    reader
        .read_to_end(&mut body)
        .map_err(|e| Error::from_io(e, "read body"))?;
    Ok(body)
}

/// Reads exactly `length` bytes, tolerating an early close.
fn read_sized_body<R: BufRead>(reader: &mut R, length: u64) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    reader
        .take(length)
        .read_to_end(&mut body)
        .map_err(|e| Error::from_io(e, "read body"))?;
    if (body.len() as u64) < length {
        warn!(
            expected = length,
            received = body.len(),
            "connection closed before the declared body length"
        );
    }
    Ok(body)
}

/// Decodes a chunked transfer coding, discarding any trailers.
fn read_chunked_body<R: BufRead>(reader: &mut R) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    loop {
        let size_line = read_line(reader)?
            .ok_or_else(|| Error::network("connection closed inside chunked body"))?;
        let size_token = size_line
            .trim()
            .split(';')
            .next()
            .unwrap_or("")
            .trim();
        let size = u64::from_str_radix(size_token, 16)
            .map_err(|_| Error::invalid_request(format!("malformed chunk size: {size_line:?}")))?;

        if size == 0 {
            // Trailer section: lines until the terminating blank line.
            while let Some(line) = read_line(reader)? {
                if line.trim().is_empty() {
                    break;
                }
            }
            return Ok(body);
        }

        let start = body.len();
        reader
            .take(size)
            .read_to_end(&mut body)
            .map_err(|e| Error::from_io(e, "read chunk"))?;
        if (body.len() - start) as u64 != size {
            return Err(Error::network("connection closed inside chunk"));
        }
        // Consume the CRLF that terminates the chunk data.
        let _ = read_line(reader)?;
    }
}

/// Reads one line up to `\n`, returning `None` at EOF. The trailing
/// CRLF is stripped; bytes are decoded lossily so non-UTF-8 header
/// values cannot fail the read.
fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut raw = Vec::new();
    let read = reader
        .read_until(b'\n', &mut raw)
        .map_err(|e| Error::from_io(e, "read line"))?;
    if read == 0 {
        return Ok(None);
    }
    while matches!(raw.last(), Some(b'\n' | b'\r')) {
        raw.pop();
    }
    Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
}
