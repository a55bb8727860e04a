//! Error types for the HTTP client.
//!
//! The error surface distinguishes three conditions callers care about:
//!
//! - [`Error::Network`]: the server could not be reached (connection, DNS,
//!   or TLS setup failure). Wraps [`NetworkError`] so transport internals
//!   stay out of the public API.
//! - [`Error::Timeout`]: the transport reported a deadline exceeded.
//! - [`Error::InvalidRequest`]: library misuse or a response the client
//!   could not frame (e.g. a garbled status line).
//!
//! A response with a 4xx/5xx status is *not* an error: once a valid status
//! line has been received the call completes normally and classification is
//! the caller's job via the [`Response`](crate::Response) predicates.

use std::io;

use thiserror::Error;

/// Result type alias for all client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type returned by the client.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Network/transport layer failure; the exchange never completed.
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// The transport reported that the configured deadline elapsed.
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Malformed usage or an unparseable response.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Encapsulated network errors hiding transport implementation details.
///
/// Third-party TLS/socket error types are flattened into these variants so
/// the public API stays stable when the underlying transport changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NetworkError {
    /// TCP connection could not be established.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Hostname did not resolve to any address.
    #[error("DNS resolution failed: {0}")]
    DnsResolution(String),

    /// TLS handshake or certificate failure.
    #[error("SSL/TLS error: {0}")]
    Ssl(String),

    /// Raw I/O failure while sending or receiving.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Creates a `Network` error with a connection-failure message.
    pub fn network(message: impl Into<String>) -> Self {
        Error::Network(NetworkError::ConnectionFailed(message.into()))
    }

    /// Creates a `Timeout` error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Error::Timeout(message.into())
    }

    /// Creates an `InvalidRequest` error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Error::InvalidRequest(message.into())
    }

    /// Converts an I/O error, promoting timeout kinds to [`Error::Timeout`].
    ///
    /// Socket read/write deadlines surface as `TimedOut` (or `WouldBlock`
    /// on some platforms); everything else stays a network error.
    pub(crate) fn from_io(err: io::Error, context: &str) -> Self {
        match err.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => {
                Error::Timeout(format!("{context}: {err}"))
            }
            _ => Error::Network(NetworkError::Io(err)),
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }

    /// Returns `true` if this is a network/transport error.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_timeout_kinds_become_timeout_errors() {
        let err = Error::from_io(io::Error::new(io::ErrorKind::TimedOut, "deadline"), "read");
        assert!(err.is_timeout());

        let err = Error::from_io(io::Error::new(io::ErrorKind::WouldBlock, "deadline"), "read");
        assert!(err.is_timeout());
    }

    #[test]
    fn other_io_kinds_stay_network_errors() {
        let err = Error::from_io(
            io::Error::new(io::ErrorKind::ConnectionReset, "reset"),
            "read",
        );
        assert!(err.is_network());
        assert!(!err.is_timeout());
    }

    #[test]
    fn errors_are_displayable() {
        let err = Error::network("refused");
        assert_eq!(err.to_string(), "Network error: Connection failed: refused");

        let err = Error::timeout("connect");
        assert_eq!(err.to_string(), "Request timeout: connect");
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_bounds<T: Send + Sync + 'static>() {}
        assert_bounds::<Error>();
        assert_bounds::<NetworkError>();
    }
}
