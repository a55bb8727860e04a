//! Library-TLS transport backend.

use std::sync::Arc;

use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, RootCertStore, StreamOwned};

use crate::error::{Error, NetworkError, Result};

use super::{Stream, Timeouts, Transport, open_tcp};

/// Transport backed by `rustls` with the `webpki-roots` trust store.
///
/// Contract-equivalent to [`NativeTlsTransport`](super::NativeTlsTransport);
/// useful where no platform TLS stack is available or a pure-Rust stack is
/// preferred. The client configuration is built once and shared across
/// connections.
#[derive(Debug)]
pub struct RustlsTransport {
    config: Arc<ClientConfig>,
}

impl RustlsTransport {
    /// Creates the transport with the bundled web PKI roots.
    #[must_use]
    pub fn new() -> Self {
        let roots = RootCertStore {
            roots: webpki_roots::TLS_SERVER_ROOTS.iter().cloned().collect(),
        };
        let config = ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth();
        RustlsTransport {
            config: Arc::new(config),
        }
    }
}

impl Default for RustlsTransport {
    fn default() -> Self {
        RustlsTransport::new()
    }
}

impl Transport for RustlsTransport {
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

        let server_name = ServerName::try_from(host.to_string()).map_err(|e| {
            Error::Network(NetworkError::Ssl(format!("invalid server name {host}: {e}")))
        })?;
        let connection = ClientConnection::new(Arc::clone(&self.config), server_name)
            .map_err(|e| Error::Network(NetworkError::Ssl(format!("TLS setup failed: {e}"))))?;
        Ok(Box::new(StreamOwned::new(connection, tcp)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_builds_a_shared_config() {
        let transport = RustlsTransport::new();
        let clone = Arc::clone(&transport.config);
        assert!(Arc::ptr_eq(&transport.config, &clone));
    }
}
