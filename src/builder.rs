//! Deferred request construction.

use std::time::Duration;

use crate::cookie::Cookie;
use crate::encoding::{build_query_string, percent_encode};
use crate::form::FormData;
use crate::request::{DEFAULT_TIMEOUT, Headers, Method, Request, basic_auth_value};

/// Staging area that accumulates configuration before materializing an
/// immutable [`Request`].
///
/// Unlike [`Request`], the builder can grow the URL incrementally through
/// [`query_param`](RequestBuilder::query_param) and synthesizes a `Cookie`
/// header at build time. [`build`](RequestBuilder::build) takes `&self`, so
/// one builder can stamp out several independent requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    headers: Headers,
    body: Vec<u8>,
    timeout: Duration,
    cookies: Vec<Cookie>,
}

impl RequestBuilder {
    /// Starts a builder for the given method and locator.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        RequestBuilder {
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
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Percent-encodes and appends one query parameter to the URL.
    ///
    /// Uses `?` when the URL does not yet contain one, `&` thereafter.
    #[must_use]
    pub fn query_param(mut self, key: &str, value: &str) -> Self {
        let separator = if self.url.contains('?') { '&' } else { '?' };
        self.url.push(separator);
        self.url.push_str(&percent_encode(key));
        self.url.push('=');
        self.url.push_str(&percent_encode(value));
        self
    }

    /// Appends each pair in order via [`query_param`](Self::query_param).
    #[must_use]
    pub fn query_params<'a, I>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in params {
            self = self.query_param(key, value);
        }
        self
    }

    /// Sets the body and records its `Content-Length` header.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        if !self.body.is_empty() {
            self.headers
                .insert("Content-Length".to_string(), self.body.len().to_string());
        }
        self
    }

    /// Sets a JSON body with the matching `Content-Type`.
    #[must_use]
    pub fn json_body(self, json: impl Into<Vec<u8>>) -> Self {
        self.header("Content-Type", "application/json").body(json)
    }

    /// URL-encodes the pairs as an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn form_urlencoded<'a, I>(self, params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.header("Content-Type", "application/x-www-form-urlencoded")
            .body(build_query_string(params))
    }

    /// Encodes a multipart form as the body with its boundary content type.
    #[must_use]
    pub fn multipart(self, form: &FormData) -> Self {
        self.header("Content-Type", form.content_type())
            .body(form.encode())
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Appends a cookie; all cookies join one `Cookie` header at build time.
    #[must_use]
    pub fn cookie(mut self, cookie: Cookie) -> Self {
        self.cookies.push(cookie);
        self
    }

    /// Sets `Authorization: Basic <base64(user:pass)>`.
    #[must_use]
    pub fn basic_auth(self, username: &str, password: &str) -> Self {
        self.header("Authorization", basic_auth_value(username, password))
    }

    /// Sets `Authorization: Bearer <token>`.
    #[must_use]
    pub fn bearer_token(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {token}"))
    }

    /// The URL as accumulated so far.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Materializes an independent [`Request`] snapshot.
    ///
    /// Building twice from the same state yields two requests with
    /// identical content and independent storage.
    #[must_use]
    pub fn build(&self) -> Request {
        let mut request = Request::new(self.method, self.url.clone())
            .with_body(self.body.clone())
            .with_timeout(self.timeout);

        for (key, value) in &self.headers {
            request = request.with_header(key.clone(), value.clone());
        }

        if !self.cookies.is_empty() {
            let joined = self
                .cookies
                .iter()
                .map(|c| format!("{}={}", c.name, c.value))
                .collect::<Vec<_>>()
                .join("; ");
            request = request.with_header("Cookie", joined);
        }

        request
    }
}
