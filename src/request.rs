//! Request model: method, header table, body, timeout, cookies, auth.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use base64::{Engine as _, engine::general_purpose};

use crate::cookie::Cookie;

/// Default per-request timeout (30 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header table with case-sensitive keys as supplied by the caller.
///
/// Setting the same key twice overwrites; iteration order is the map's
/// key order, which keeps serialized requests deterministic.
pub type Headers = BTreeMap<String, String>;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// HEAD
    Head,
    /// OPTIONS
    Options,
    /// PATCH
    Patch,
    /// TRACE
    Trace,
    /// CONNECT
    Connect,
}

impl Method {
    /// The method token as sent on the request line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
            Method::Trace => "TRACE",
            Method::Connect => "CONNECT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully described outgoing request.
///
/// All setters take and return the value itself, so configuration chains
/// without aliasing a shared mutable reference:
///
/// ```
/// use fasthttp::{Method, Request};
///
/// let request = Request::new(Method::Post, "http://example.com/api")
///     .with_json_content()
///     .with_body(r#"{"k":"v"}"#)
///     .with_bearer_token("tok");
/// assert_eq!(request.header("Authorization"), Some("Bearer tok"));
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: String,
    headers: Headers,
    body: Vec<u8>,
    timeout: Duration,
    cookies: Vec<Cookie>,
}

impl Request {
    /// Creates a request with the default 30 second timeout and no headers.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Request {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            cookies: Vec::new(),
        }
    }

    /// Sets a header, overwriting any previous value for the same key.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Appends a cookie to be sent with the request.
    #[must_use]
    pub fn with_cookie(mut self, cookie: Cookie) -> Self {
        self.cookies.push(cookie);
        self
    }

    /// Sets the `Content-Type` header.
    #[must_use]
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// Sets `Content-Type: application/json`.
    #[must_use]
    pub fn with_json_content(self) -> Self {
        self.with_content_type("application/json")
    }

    /// Sets `Content-Type: application/x-www-form-urlencoded`.
    #[must_use]
    pub fn with_form_content(self) -> Self {
        self.with_content_type("application/x-www-form-urlencoded")
    }

    /// Sets `Authorization: Basic <base64(user:pass)>`.
    #[must_use]
    pub fn with_basic_auth(self, username: &str, password: &str) -> Self {
        self.with_header("Authorization", basic_auth_value(username, password))
    }

    /// Sets `Authorization: Bearer <token>`.
    #[must_use]
    pub fn with_bearer_token(self, token: &str) -> Self {
        self.with_header("Authorization", format!("Bearer {token}"))
    }

    /// The request method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// The raw locator string this request targets.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The full header table.
    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Looks up a header by its exact (case-sensitive) key.
    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Returns `true` when the header key is present.
    #[must_use]
    pub fn has_header(&self, key: &str) -> bool {
        self.headers.contains_key(key)
    }

    /// The request body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Cookies attached to the request, in insertion order.
    #[must_use]
    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }
}

/// Encodes `user:pass` with the standard base64 alphabet and `=` padding.
pub(crate) fn basic_auth_value(username: &str, password: &str) -> String {
    let credentials = format!("{username}:{password}");
    format!(
        "Basic {}",
        general_purpose::STANDARD.encode(credentials.as_bytes())
    )
}
