//! Request execution and verb conveniences.

use std::io::Write;

use tracing::{debug, error, instrument};

use crate::builder::RequestBuilder;
use crate::error::{Error, Result};
use crate::form::FormData;
use crate::request::{Headers, Method, Request};
use crate::response::Response;
use crate::transport::Timeouts;
use crate::url::Url;

use super::builder::HttpClient;
use super::response::read_response;

impl HttpClient {
    /// Executes a request and returns the parsed response.
    ///
    /// Runs one linear Connect → Configure → Send → Receive → Parse →
    /// Teardown pass: no retries, no redirect following. The connection is
    /// dropped on every exit path. A 4xx/5xx status is a successful
    /// exchange; only transport failures and malformed response framing
    /// produce errors.
    ///
    /// # Errors
    ///
    /// - [`Error::Network`] when connecting or transmitting fails.
    /// - [`Error::Timeout`] when a socket deadline elapses.
    /// - [`Error::InvalidRequest`] for an unusable URL or a garbled
    ///   status line.
    #[instrument(
        name = "http_execute",
        skip(self, request),
        fields(method = %request.method(), url = %request.url())
    )]
    pub fn execute(&self, request: &Request) -> Result<Response> {
        let url = Url::parse(request.url());
        if url.host.is_empty() {
            return Err(Error::invalid_request(format!(
                "URL has no host: {}",
                request.url()
            )));
        }

        let timeouts = Timeouts {
            connect: self.config().connect_timeout,
            io: request.timeout(),
        };

        let mut stream = self
            .transport()
            .connect(&url.host, url.port, url.is_secure(), &timeouts)
            .map_err(|e| {
                error!(host = %url.host, port = url.port, error = %e, "connection failed");
                e
            })?;

        let wire_request = self.serialize_request(request, &url);
        debug!(bytes = wire_request.len(), "sending request");
        stream
            .write_all(&wire_request)
            .and_then(|()| stream.flush())
            .map_err(|e| {
                error!(error = %e, "request transmission failed");
                Error::from_io(e, "send request")
            })?;

        let response = read_response(&mut stream, request.method())?;
        debug!(
            status = response.status_code(),
            body_length = response.body().len(),
            "response received"
        );
        Ok(response)
        // stream drops here, closing the connection on success and on
        // every early return above
    }

    /// Serializes the request line, merged header block, and body.
    ///
    /// Request headers override the client's default headers on exact-key
    /// collision. `Host`, `User-Agent`, `Connection: close`,
    /// `Content-Length`, and a `Cookie` header synthesized from the
    /// request's cookies are supplied only when the caller set none
    /// (matched case-insensitively).
    fn serialize_request(&self, request: &Request, url: &Url) -> Vec<u8> {
        let mut headers = request.headers().clone();
        for (key, value) in &self.config().default_headers {
            headers.entry(key.clone()).or_insert_with(|| value.clone());
        }

        if !contains_key_ignore_case(&headers, "host") {
            headers.insert("Host".to_string(), url.host.clone());
        }
        if !contains_key_ignore_case(&headers, "user-agent") {
            headers.insert("User-Agent".to_string(), self.config().user_agent.clone());
        }
        if !contains_key_ignore_case(&headers, "connection") {
            headers.insert("Connection".to_string(), "close".to_string());
        }

        let body = request.body();
        let needs_length = !body.is_empty()
            || matches!(request.method(), Method::Post | Method::Put | Method::Patch);
        if needs_length && !contains_key_ignore_case(&headers, "content-length") {
            headers.insert("Content-Length".to_string(), body.len().to_string());
        }

        if !request.cookies().is_empty() && !contains_key_ignore_case(&headers, "cookie") {
            let joined = request
                .cookies()
                .iter()
                .map(|c| format!("{}={}", c.name, c.value))
                .collect::<Vec<_>>()
                .join("; ");
            headers.insert("Cookie".to_string(), joined);
        }

        let mut wire = Vec::with_capacity(256 + body.len());
        wire.extend_from_slice(
            format!("{} {} HTTP/1.1\r\n", request.method(), url.request_target()).as_bytes(),
        );
        for (key, value) in &headers {
            wire.extend_from_slice(format!("{key}: {value}\r\n").as_bytes());
        }
        wire.extend_from_slice(b"\r\n");
        wire.extend_from_slice(body);
        wire
    }

    /// Starts a [`RequestBuilder`] for this client's `execute`.
    #[must_use]
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        RequestBuilder::new(method, url)
    }

    /// Executes a GET request.
    pub fn get(&self, url: &str, headers: Option<&Headers>) -> Result<Response> {
        self.execute(&self.prepare(Method::Get, url, None, headers))
    }

    /// Executes a POST request with the given body.
    pub fn post(
        &self,
        url: &str,
        body: impl Into<Vec<u8>>,
        headers: Option<&Headers>,
    ) -> Result<Response> {
        self.execute(&self.prepare(Method::Post, url, Some(body.into()), headers))
    }

    /// Executes a PUT request with the given body.
    pub fn put(
        &self,
        url: &str,
        body: impl Into<Vec<u8>>,
        headers: Option<&Headers>,
    ) -> Result<Response> {
        self.execute(&self.prepare(Method::Put, url, Some(body.into()), headers))
    }

    /// Executes a DELETE request.
    pub fn delete(&self, url: &str, headers: Option<&Headers>) -> Result<Response> {
        self.execute(&self.prepare(Method::Delete, url, None, headers))
    }

    /// Executes a PATCH request with the given body.
    pub fn patch(
        &self,
        url: &str,
        body: impl Into<Vec<u8>>,
        headers: Option<&Headers>,
    ) -> Result<Response> {
        self.execute(&self.prepare(Method::Patch, url, Some(body.into()), headers))
    }

    /// Executes a HEAD request.
    pub fn head(&self, url: &str, headers: Option<&Headers>) -> Result<Response> {
        self.execute(&self.prepare(Method::Head, url, None, headers))
    }

    /// Executes an OPTIONS request.
    pub fn options(&self, url: &str, headers: Option<&Headers>) -> Result<Response> {
        self.execute(&self.prepare(Method::Options, url, None, headers))
    }

    /// POSTs a JSON body with `Content-Type: application/json`.
    pub fn post_json(&self, url: &str, json: &str, headers: Option<&Headers>) -> Result<Response> {
        let request = self.prepare_typed(Method::Post, url, json.into(), "application/json", headers);
        self.execute(&request)
    }

    /// PUTs a JSON body with `Content-Type: application/json`.
    pub fn put_json(&self, url: &str, json: &str, headers: Option<&Headers>) -> Result<Response> {
        let request = self.prepare_typed(Method::Put, url, json.into(), "application/json", headers);
        self.execute(&request)
    }

    /// PATCHes a JSON body with `Content-Type: application/json`.
    pub fn patch_json(&self, url: &str, json: &str, headers: Option<&Headers>) -> Result<Response> {
        let request =
            self.prepare_typed(Method::Patch, url, json.into(), "application/json", headers);
        self.execute(&request)
    }

    /// POSTs key/value pairs as `application/x-www-form-urlencoded`.
    pub fn post_form(&self, url: &str, form: &Headers, headers: Option<&Headers>) -> Result<Response> {
        let body = crate::encoding::build_query_string(form);
        let request = self.prepare_typed(
            Method::Post,
            url,
            body.into_bytes(),
            "application/x-www-form-urlencoded",
            headers,
        );
        self.execute(&request)
    }

    /// POSTs a `multipart/form-data` body with its boundary content type.
    pub fn post_multipart(
        &self,
        url: &str,
        form: &FormData,
        headers: Option<&Headers>,
    ) -> Result<Response> {
        let request =
            self.prepare_typed(Method::Post, url, form.encode(), &form.content_type(), headers);
        self.execute(&request)
    }

    /// Builds a request with the client's default timeout and any
    /// caller-supplied headers applied. Headers passed here become the
    /// request's own, so they win over the client defaults at
    /// serialization time.
    fn prepare(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
        headers: Option<&Headers>,
    ) -> Request {
        let mut request = Request::new(method, url).with_timeout(self.config().timeout);
        if let Some(body) = body {
            request = request.with_body(body);
        }
        if let Some(headers) = headers {
            for (key, value) in headers {
                request = request.with_header(key.clone(), value.clone());
            }
        }
        request
    }

    /// Like [`prepare`](Self::prepare) but sets a convenience content type
    /// before folding in the caller's headers, so an explicit
    /// `Content-Type` from the caller wins.
    fn prepare_typed(
        &self,
        method: Method,
        url: &str,
        body: Vec<u8>,
        content_type: &str,
        headers: Option<&Headers>,
    ) -> Request {
        let mut request = Request::new(method, url)
            .with_timeout(self.config().timeout)
            .with_body(body)
            .with_content_type(content_type);
        if let Some(headers) = headers {
            for (key, value) in headers {
                request = request.with_header(key.clone(), value.clone());
            }
        }
        request
    }
}

fn contains_key_ignore_case(headers: &Headers, key: &str) -> bool {
    headers.keys().any(|k| k.eq_ignore_ascii_case(key))
}
