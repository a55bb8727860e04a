//! Platform-TLS transport backend.

use native_tls::TlsConnector;

use crate::error::{Error, NetworkError, Result};

use super::{Stream, Timeouts, Transport, open_tcp};

/// Transport backed by the operating system's TLS stack via `native-tls`
/// (SChannel, Security.framework, or OpenSSL depending on platform).
///
/// This is the default transport installed by
/// [`HttpClient::new`](crate::HttpClient::new).
#[derive(Debug, Default)]
pub struct NativeTlsTransport;

impl NativeTlsTransport {
    /// Creates the transport. Connector setup is deferred to `connect` so
    /// construction itself cannot fail.
    #[must_use]
    pub fn new() -> Self {
        NativeTlsTransport
    }
}

impl Transport for NativeTlsTransport {
    fn connect(
        &self,
        host: &str,
        port: u16,
        secure: bool,
        timeouts: &Timeouts,
    ) -> Result<Box<dyn Stream>> {
        let tcp = open_tcp(host, port, timeouts)?;

        if !secure {
            return Ok(Box::new(tcp));
        }

        let connector = TlsConnector::new()
            .map_err(|e| Error::Network(NetworkError::Ssl(format!("TLS setup failed: {e}"))))?;
        let tls = connector.connect(host, tcp).map_err(|e| {
            Error::Network(NetworkError::Ssl(format!(
                "TLS handshake with {host} failed: {e}"
            )))
        })?;
        Ok(Box::new(tls))
    }
}
