//! Response model: status, header table, body, derived cookies.

use std::collections::BTreeMap;

use crate::cookie::Cookie;

/// The structured result of one HTTP exchange.
///
/// Header keys are stored lower-cased, so lookups are case-insensitive.
/// Setting a header twice overwrites, except that every `set-cookie` write
/// additionally appends a parsed [`Cookie`]; the transport feeds each
/// `Set-Cookie` line through [`set_header`](Response::set_header)
/// separately so none are lost to the overwrite rule.
#[derive(Debug, Clone, Default)]
pub struct Response {
    status_code: u16,
    status_message: String,
    headers: BTreeMap<String, String>,
    body: Vec<u8>,
    cookies: Vec<Cookie>,
}

impl Response {
    /// Creates a response with the given status line fields.
    pub fn new(status_code: u16, status_message: impl Into<String>) -> Self {
        Response {
            status_code,
            status_message: status_message.into(),
            ..Response::default()
        }
    }

    /// Numeric status code.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Reason phrase from the status line.
    #[must_use]
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The header table, keyed by lower-cased name.
    #[must_use]
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Response body bytes, materialized in full.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Lossy UTF-8 view of the body.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Cookies accumulated from `Set-Cookie` headers, in arrival order.
    #[must_use]
    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }

    pub(crate) fn set_body(&mut self, body: Vec<u8>) {
        self.body = body;
    }

    /// Stores a header (last write wins) and accumulates `Set-Cookie`.
    ///
    /// The key is lower-cased before storage. Call this once per header
    /// line; a merged value containing several cookies is not split.
    pub fn set_header(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let lowered = key.to_ascii_lowercase();
        if lowered == "set-cookie" {
            self.cookies.push(Cookie::parse(&value));
        }
        self.headers.insert(lowered, value);
    }

    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Returns `true` when the header is present.
    #[must_use]
    pub fn has_header(&self, key: &str) -> bool {
        self.headers.contains_key(&key.to_ascii_lowercase())
    }

    /// First cookie with the given name, if any.
    #[must_use]
    pub fn cookie(&self, name: &str) -> Option<&Cookie> {
        self.cookies.iter().find(|c| c.name == name)
    }

    /// All cookies with the given name, in arrival order.
    #[must_use]
    pub fn cookies_by_name(&self, name: &str) -> Vec<&Cookie> {
        self.cookies.iter().filter(|c| c.name == name).collect()
    }

    /// Returns `true` when a cookie with the given name arrived.
    #[must_use]
    pub fn has_cookie(&self, name: &str) -> bool {
        self.cookies.iter().any(|c| c.name == name)
    }

    /// Status in [100, 200).
    #[must_use]
    pub fn is_informational(&self) -> bool {
        (100..200).contains(&self.status_code)
    }

    /// Status in [200, 300).
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Status in [300, 400).
    #[must_use]
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status_code)
    }

    /// Status in [400, 500).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    /// Status in [500, 600).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }

    /// Label for the status class, `"Unknown"` outside [100, 600).
    #[must_use]
    pub fn status_category(&self) -> &'static str {
        if self.is_informational() {
            "Informational"
        } else if self.is_success() {
            "Success"
        } else if self.is_redirect() {
            "Redirect"
        } else if self.is_client_error() {
            "Client Error"
        } else if self.is_server_error() {
            "Server Error"
        } else {
            "Unknown"
        }
    }

    /// Raw `Content-Type` header value, empty when absent.
    #[must_use]
    pub fn content_type(&self) -> &str {
        self.header("content-type").unwrap_or("")
    }

    /// Raw `Content-Encoding` header value, empty when absent.
    #[must_use]
    pub fn content_encoding(&self) -> &str {
        self.header("content-encoding").unwrap_or("")
    }

    /// Parsed `Content-Length`, or the buffered body length when the
    /// header is absent or unparseable. Never fails.
    #[must_use]
    pub fn content_length(&self) -> usize {
        self.header("content-length")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(self.body.len())
    }

    /// Content-type sniff for `application/json`.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type().contains("application/json")
    }

    /// Content-type sniff for `application/xml` or `text/xml`.
    #[must_use]
    pub fn is_xml(&self) -> bool {
        let content_type = self.content_type();
        content_type.contains("application/xml") || content_type.contains("text/xml")
    }

    /// Content-type sniff for `text/html`.
    #[must_use]
    pub fn is_html(&self) -> bool {
        self.content_type().contains("text/html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let mut response = Response::new(200, "OK");
        response.set_header("Content-Type", "text/html");
        assert_eq!(response.header("content-type"), Some("text/html"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("text/html"));
        assert!(response.has_header("Content-Type"));
    }

    #[test]
    fn repeated_set_header_overwrites() {
        let mut response = Response::new(200, "OK");
        response.set_header("X-Id", "1");
        response.set_header("x-id", "2");
        assert_eq!(response.header("X-Id"), Some("2"));
        assert_eq!(response.headers().len(), 1);
    }

    #[test]
    fn each_set_cookie_line_appends_a_cookie() {
        let mut response = Response::new(200, "OK");
        response.set_header("Set-Cookie", "a=1; Path=/");
        response.set_header("Set-Cookie", "b=2; Secure");
        assert_eq!(response.cookies().len(), 2);
        assert_eq!(response.cookies()[0].name, "a");
        assert_eq!(response.cookies()[1].name, "b");
        // The header table itself keeps only the last write.
        assert_eq!(response.header("set-cookie"), Some("b=2; Secure"));
    }

    #[test]
    fn cookie_lookup_helpers() {
        let mut response = Response::new(200, "OK");
        response.set_header("Set-Cookie", "sid=first");
        response.set_header("Set-Cookie", "sid=second");
        assert!(response.has_cookie("sid"));
        assert_eq!(response.cookie("sid").unwrap().value, "first");
        assert_eq!(response.cookies_by_name("sid").len(), 2);
        assert!(!response.has_cookie("missing"));
    }

    #[test]
    fn classification_ranges() {
        assert!(Response::new(101, "Switching").is_informational());
        assert!(Response::new(204, "No Content").is_success());
        assert!(Response::new(302, "Found").is_redirect());
        assert!(Response::new(404, "Not Found").is_client_error());
        assert!(Response::new(503, "Unavailable").is_server_error());
        assert_eq!(Response::new(404, "Not Found").status_category(), "Client Error");
        assert_eq!(Response::new(99, "odd").status_category(), "Unknown");
        assert_eq!(Response::new(600, "odd").status_category(), "Unknown");
    }

    #[test]
    fn content_length_prefers_header() {
        let mut response = Response::new(200, "OK");
        response.set_body(b"12345".to_vec());
        assert_eq!(response.content_length(), 5);

        response.set_header("Content-Length", "99");
        assert_eq!(response.content_length(), 99);

        response.set_header("Content-Length", "not-a-number");
        assert_eq!(response.content_length(), 5);
    }

    #[test]
    fn sniffs_ignore_charset_parameters() {
        let mut response = Response::new(200, "OK");
        response.set_header("Content-Type", "application/json; charset=utf-8");
        assert!(response.is_json());
        assert!(!response.is_xml());
        assert!(!response.is_html());

        response.set_header("Content-Type", "text/xml");
        assert!(response.is_xml());
    }

    #[test]
    fn body_text_is_lossy() {
        let mut response = Response::new(200, "OK");
        response.set_body(vec![0x68, 0x69, 0xFF]);
        assert_eq!(response.body_text(), "hi\u{FFFD}");
    }
}
