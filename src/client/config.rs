//! Client configuration.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::request::Headers;

/// Configuration applied by [`HttpClient`](super::HttpClient) to every
/// request it executes.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Default per-request timeout applied by the verb conveniences
    /// (default: 30 seconds). A timeout set on the request itself wins.
    pub timeout: Duration,
    /// TCP connection timeout (default: 10 seconds).
    pub connect_timeout: Duration,
    /// Default `User-Agent` header value, sent when the request carries
    /// none of its own.
    pub user_agent: String,
    /// Headers merged into every request; request headers take precedence
    /// on key collision.
    pub default_headers: Headers,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: "fasthttp/0.1".to_string(),
            default_headers: Headers::new(),
        }
    }
}

impl HttpConfig {
    /// Validates the configuration.
    ///
    /// Returns warnings for suboptimal but usable values; rejects values
    /// that are almost certainly mistakes.
    ///
    /// # Errors
    ///
    /// Returns an error if a timeout is zero or exceeds five minutes.
    pub fn validate(&self) -> Result<Vec<String>> {
        let max_timeout = Duration::from_secs(300);

        if self.timeout.is_zero() || self.connect_timeout.is_zero() {
            return Err(Error::invalid_request("timeouts must be non-zero"));
        }
        if self.timeout > max_timeout {
            return Err(Error::invalid_request(format!(
                "timeout {:?} exceeds the 5 minute maximum",
                self.timeout
            )));
        }
        if self.connect_timeout > max_timeout {
            return Err(Error::invalid_request(format!(
                "connect_timeout {:?} exceeds the 5 minute maximum",
                self.connect_timeout
            )));
        }

        let mut warnings = Vec::new();
        if self.timeout < Duration::from_secs(1) {
            warnings.push(format!(
                "timeout {:?} is very short, may cause frequent timeouts",
                self.timeout
            ));
        }
        Ok(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let warnings = HttpConfig::default().validate().unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = HttpConfig {
            timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn excessive_timeout_is_rejected() {
        let config = HttpConfig {
            timeout: Duration::from_secs(600),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn short_timeout_warns() {
        let config = HttpConfig {
            timeout: Duration::from_millis(200),
            ..Default::default()
        };
        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 1);
    }
}
