//! Client facade and request executor.
//!
//! [`HttpClient`] applies default headers and timeouts, opens a connection
//! through its [`Transport`](crate::transport::Transport), performs one
//! blocking exchange, and returns a parsed [`Response`](crate::Response).
//!
//! # Example
//!
//! ```rust,no_run
//! use fasthttp::{HttpClient, HttpConfig};
//!
//! # fn main() -> fasthttp::Result<()> {
//! let client = HttpClient::new(HttpConfig::default())?;
//! let response = client.get("https://example.com/api", None)?;
//! assert!(response.is_success());
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod request;
mod response;


pub use builder::HttpClient;
pub use config::HttpConfig;
