//! Blocking HTTP/1.1 client library.
//!
//! The crate provides a small, synchronous request/response stack: URL and
//! percent-encoding primitives, cookie and multipart form models, a fluent
//! [`RequestBuilder`], and an [`HttpClient`] that drives requests over a
//! pluggable [`Transport`]. Connections are one-shot (`Connection: close`);
//! there is no pooling, redirect following, or async runtime.
//!
//! # Example
//!
//! ```rust,no_run
//! use fasthttp::{HttpClient, HttpConfig, Method};
//!
//! fn example() -> fasthttp::Result<()> {
//!     let client = HttpClient::new(HttpConfig::default())?;
//!     let request = client
//!         .request(Method::Get, "https://api.example.com/v1/users")
//!         .query_param("page", "1")
//!         .bearer_token("token")
//!         .build();
//!     let response = client.execute(&request)?;
//!     if response.is_success() {
//!         println!("{}", response.body_text());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! For one-off calls the module-level free functions ([`get`], [`post`],
//! and friends) construct a default client per call.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]

pub mod builder;
pub mod client;
pub mod cookie;
pub mod encoding;
pub mod error;
pub mod form;
pub mod logging;
pub mod request;
pub mod response;
pub mod transport;
pub mod url;

pub use builder::RequestBuilder;
pub use client::{HttpClient, HttpConfig};
pub use cookie::Cookie;
pub use encoding::{build_query_string, percent_decode, percent_encode};
pub use error::{Error, NetworkError, Result};
pub use form::FormData;
pub use logging::{init_logging, try_init_logging, LogConfig, LogFormat, LogLevel};
pub use request::{Headers, Method, Request, DEFAULT_TIMEOUT};
pub use response::Response;
pub use transport::{NativeTlsTransport, RustlsTransport, Stream, Timeouts, Transport};
pub use url::Url;

fn default_client() -> Result<HttpClient> {
    HttpClient::new(HttpConfig::default())
}

/// Executes a request with a default-configured client.
pub fn execute(request: &Request) -> Result<Response> {
    default_client()?.execute(request)
}

/// Performs a GET request with a default-configured client.
pub fn get(url: &str, headers: Option<&Headers>) -> Result<Response> {
    default_client()?.get(url, headers)
}

/// Performs a POST request with a default-configured client.
pub fn post(url: &str, body: impl Into<Vec<u8>>, headers: Option<&Headers>) -> Result<Response> {
    default_client()?.post(url, body, headers)
}

/// Performs a PUT request with a default-configured client.
pub fn put(url: &str, body: impl Into<Vec<u8>>, headers: Option<&Headers>) -> Result<Response> {
    default_client()?.put(url, body, headers)
}

/// Performs a DELETE request with a default-configured client.
pub fn delete(url: &str, headers: Option<&Headers>) -> Result<Response> {
    default_client()?.delete(url, headers)
}

/// Performs a PATCH request with a default-configured client.
pub fn patch(url: &str, body: impl Into<Vec<u8>>, headers: Option<&Headers>) -> Result<Response> {
    default_client()?.patch(url, body, headers)
}

/// Performs a HEAD request with a default-configured client.
pub fn head(url: &str, headers: Option<&Headers>) -> Result<Response> {
    default_client()?.head(url, headers)
}

/// Performs an OPTIONS request with a default-configured client.
pub fn options(url: &str, headers: Option<&Headers>) -> Result<Response> {
    default_client()?.options(url, headers)
}

/// POSTs a JSON body with a default-configured client.
pub fn post_json(url: &str, json: &str, headers: Option<&Headers>) -> Result<Response> {
    default_client()?.post_json(url, json, headers)
}

/// PUTs a JSON body with a default-configured client.
pub fn put_json(url: &str, json: &str, headers: Option<&Headers>) -> Result<Response> {
    default_client()?.put_json(url, json, headers)
}

/// PATCHes a JSON body with a default-configured client.
pub fn patch_json(url: &str, json: &str, headers: Option<&Headers>) -> Result<Response> {
    default_client()?.patch_json(url, json, headers)
}

/// POSTs url-encoded form fields with a default-configured client.
pub fn post_form(url: &str, form: &Headers, headers: Option<&Headers>) -> Result<Response> {
    default_client()?.post_form(url, form, headers)
}

/// POSTs a multipart form with a default-configured client.
pub fn post_multipart(
    url: &str,
    form: &FormData,
    headers: Option<&Headers>,
) -> Result<Response> {
    default_client()?.post_multipart(url, form, headers)
}

/// Percent-encodes a string for use in URLs. Alias for [`percent_encode`].
pub fn url_encode(input: &str) -> String {
    percent_encode(input)
}

/// Decodes a percent-encoded string. Alias for [`percent_decode`].
pub fn url_decode(input: &str) -> String {
    percent_decode(input)
}
