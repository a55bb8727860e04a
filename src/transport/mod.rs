//! Pluggable connection transport.
//!
//! The executor depends only on the [`Transport`] capability: given host,
//! port, and a secure flag it yields a blocking byte stream. Two backends
//! ship with the crate, [`NativeTlsTransport`] (platform TLS) and
//! [`RustlsTransport`] (library TLS), and tests supply in-memory mocks.
//! Dropping the returned stream closes the connection, so teardown happens
//! on every exit path by scope alone.

mod native;
mod rustls;

pub use self::native::NativeTlsTransport;
pub use self::rustls::RustlsTransport;

use std::fmt;
use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::debug;

use crate::error::{Error, NetworkError, Result};

/// A blocking, bidirectional byte stream to the server.
pub trait Stream: Read + Write + Send {}

impl<T: Read + Write + Send> Stream for T {}

/// Deadlines applied to a connection before any I/O happens.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    /// TCP connect deadline.
    pub connect: Duration,
    /// Read/write deadline on the established socket.
    pub io: Duration,
}

/// Opens connections for the executor.
///
/// Implementations select plaintext or TLS from the `secure` flag; they do
/// not interpret the bytes flowing through the stream.
pub trait Transport: fmt::Debug + Send + Sync {
    /// Connects to `host:port`, wrapping the socket in TLS when `secure`.
    fn connect(
        &self,
        host: &str,
        port: u16,
        secure: bool,
        timeouts: &Timeouts,
    ) -> Result<Box<dyn Stream>>;
}

/// Resolves the host and opens a TCP socket with the given deadlines.
///
/// Both TLS backends share this: DNS failures and empty resolutions map to
/// network errors, a connect deadline maps to a timeout, and read/write
/// deadlines are installed before the socket is handed back.
pub(crate) fn open_tcp(host: &str, port: u16, timeouts: &Timeouts) -> Result<TcpStream> {
    let addrs = (host, port)
        .to_socket_addrs()
        .map_err(|e| Error::Network(NetworkError::DnsResolution(format!("{host}: {e}"))))?;

    let mut last_error: Option<Error> = None;
    for addr in addrs {
        debug!(%addr, host, port, "opening TCP connection");
        match TcpStream::connect_timeout(&addr, timeouts.connect) {
            Ok(stream) => {
                stream
                    .set_read_timeout(Some(timeouts.io))
                    .map_err(|e| Error::from_io(e, "set read timeout"))?;
                stream
                    .set_write_timeout(Some(timeouts.io))
                    .map_err(|e| Error::from_io(e, "set write timeout"))?;
                return Ok(stream);
            }
            Err(e) => last_error = Some(Error::from_io(e, "connect")),
        }
    }

    Err(last_error.unwrap_or_else(|| {
        Error::Network(NetworkError::DnsResolution(format!(
            "{host}: no addresses resolved"
        )))
    }))
}
