//! Client construction and shared state.

use std::sync::Arc;

use crate::error::Result;
use crate::transport::{NativeTlsTransport, Transport};

use super::config::HttpConfig;

/// Blocking HTTP client.
///
/// Holds default headers and timeouts plus the [`Transport`] used to open
/// connections. The client itself keeps no per-request state: each call
/// opens, uses, and tears down its own connection, so a client shared
/// across threads behind an `Arc` is safe as long as nothing mutates the
/// configuration concurrently.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: HttpConfig,
    transport: Arc<dyn Transport>,
}

impl HttpClient {
    /// Creates a client with the platform-TLS transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(config: HttpConfig) -> Result<Self> {
        Self::with_transport(config, Arc::new(NativeTlsTransport::new()))
    }

    /// Creates a client over a caller-supplied transport.
    ///
    /// This is the seam for the `rustls` backend and for test doubles.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn with_transport(config: HttpConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        for warning in config.validate()? {
            tracing::warn!(warning = %warning, "questionable client configuration");
        }
        Ok(Self { config, transport })
    }

    /// Sets the default timeout applied by the verb conveniences.
    pub fn set_default_timeout(&mut self, timeout: std::time::Duration) {
        self.config.timeout = timeout;
    }

    /// Sets a header merged into every request (request headers win on
    /// collision).
    pub fn set_default_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.config.default_headers.insert(key.into(), value.into());
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}
