//! URL parsing.
//!
//! [`Url::parse`] is total: any input string produces a `Url`, possibly
//! with empty fields. No scheme validation, IDN handling, or
//! percent-decoding of the host is performed: the parser only carves the
//! locator into the pieces the transport needs.

/// A parsed request locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    /// Scheme, e.g. `http` or `https`. Empty when the input had no `://`.
    pub scheme: String,
    /// Host name or address, undecoded.
    pub host: String,
    /// Port; defaults to 443 for `https` and 80 otherwise.
    pub port: u16,
    /// Path component, `/` when absent.
    pub path: String,
    /// Raw query string without the leading `?`.
    pub query: String,
    /// Fragment without the leading `#`. Never transmitted.
    pub fragment: String,
}

impl Default for Url {
    fn default() -> Self {
        Self {
            scheme: String::new(),
            host: String::new(),
            port: 80,
            path: "/".to_string(),
            query: String::new(),
            fragment: String::new(),
        }
    }
}

impl Url {
    /// Parses a locator string. Never fails.
    ///
    /// The scheme is whatever precedes `://`; `https` switches the default
    /// port to 443. The authority ends at the first of `/`, `?`, or `#`,
    /// so a port followed directly by a query or fragment still parses. A
    /// `:` inside the authority introduces a port; a non-numeric port
    /// substring falls back to the scheme default so that parsing stays
    /// total. `?` and `#` carve query and fragment out of the path, with
    /// the query taking precedence when both are present.
    #[must_use]
    pub fn parse(raw: &str) -> Url {
        let mut url = Url::default();
        let mut rest = raw;

        if let Some(scheme_end) = rest.find("://") {
            url.scheme = rest[..scheme_end].to_string();
            rest = &rest[scheme_end + 3..];
            if url.scheme == "https" {
                url.port = 443;
            }
        }

        let (authority, tail) = match rest.find(['/', '?', '#']) {
            Some(pos) => (&rest[..pos], &rest[pos..]),
            None => (rest, ""),
        };

        match authority.find(':') {
            Some(pos) => {
                url.host = authority[..pos].to_string();
                if let Ok(port) = authority[pos + 1..].parse::<u16>() {
                    url.port = port;
                }
            }
            None => url.host = authority.to_string(),
        }

        if !tail.is_empty() {
            let query_pos = tail.find('?');
            let fragment_pos = tail.find('#');
            match (query_pos, fragment_pos) {
                (Some(q), Some(f)) if f > q => {
                    url.path = tail[..q].to_string();
                    url.query = tail[q + 1..f].to_string();
                    url.fragment = tail[f + 1..].to_string();
                }
                (Some(q), _) => {
                    url.path = tail[..q].to_string();
                    url.query = tail[q + 1..].to_string();
                }
                (None, Some(f)) => {
                    url.path = tail[..f].to_string();
                    url.fragment = tail[f + 1..].to_string();
                }
                (None, None) => url.path = tail.to_string(),
            }
            if url.path.is_empty() {
                url.path = "/".to_string();
            }
        }

        url
    }

    /// Formats the URL back into a canonical locator string.
    ///
    /// The default port for the scheme is omitted, so parsing the result
    /// reproduces the same `Url` value.
    #[must_use]
    pub fn to_canonical_string(&self) -> String {
        let mut out = String::new();
        if !self.scheme.is_empty() {
            out.push_str(&self.scheme);
            out.push_str("://");
        }
        out.push_str(&self.host);
        let default_port = if self.scheme == "https" { 443 } else { 80 };
        if self.port != default_port {
            out.push(':');
            out.push_str(&self.port.to_string());
        }
        out.push_str(&self.path);
        if !self.query.is_empty() {
            out.push('?');
            out.push_str(&self.query);
        }
        if !self.fragment.is_empty() {
            out.push('#');
            out.push_str(&self.fragment);
        }
        out
    }

    /// Returns `true` when the scheme selects the secure transport.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.scheme == "https"
    }

    /// Path plus query as sent on the request line.
    #[must_use]
    pub fn request_target(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url_parses_into_all_components() {
        let url = Url::parse("https://api.example.com:8080/v1/users?page=1&limit=10#section");
        assert_eq!(url.scheme, "https");
        assert_eq!(url.host, "api.example.com");
        assert_eq!(url.port, 8080);
        assert_eq!(url.path, "/v1/users");
        assert_eq!(url.query, "page=1&limit=10");
        assert_eq!(url.fragment, "section");
    }

    #[test]
    fn https_defaults_to_port_443() {
        let url = Url::parse("https://example.com/path");
        assert_eq!(url.port, 443);
        assert!(url.is_secure());
    }

    #[test]
    fn http_defaults_to_port_80() {
        let url = Url::parse("http://example.com");
        assert_eq!(url.port, 80);
        assert_eq!(url.path, "/");
        assert!(!url.is_secure());
    }

    #[test]
    fn missing_scheme_still_parses() {
        let url = Url::parse("example.com/index.html");
        assert_eq!(url.scheme, "");
        assert_eq!(url.host, "example.com");
        assert_eq!(url.path, "/index.html");
    }

    #[test]
    fn non_numeric_port_falls_back_to_default() {
        let url = Url::parse("http://example.com:abc/path");
        assert_eq!(url.host, "example.com");
        assert_eq!(url.port, 80);
        assert_eq!(url.path, "/path");

        let url = Url::parse("https://example.com:abc/path");
        assert_eq!(url.port, 443);
    }

    #[test]
    fn port_directly_before_query_is_kept() {
        let url = Url::parse("http://example.com:8080?q=1");
        assert_eq!(url.host, "example.com");
        assert_eq!(url.port, 8080);
        assert_eq!(url.path, "/");
        assert_eq!(url.query, "q=1");
    }

    #[test]
    fn port_directly_before_fragment_is_kept() {
        let url = Url::parse("https://example.com:9000#top");
        assert_eq!(url.host, "example.com");
        assert_eq!(url.port, 9000);
        assert_eq!(url.path, "/");
        assert_eq!(url.fragment, "top");
    }

    #[test]
    fn query_without_path_gets_the_default_path() {
        let url = Url::parse("http://example.com?q=1");
        assert_eq!(url.host, "example.com");
        assert_eq!(url.path, "/");
        assert_eq!(url.query, "q=1");
    }

    #[test]
    fn fragment_without_query() {
        let url = Url::parse("http://example.com/page#top");
        assert_eq!(url.path, "/page");
        assert_eq!(url.query, "");
        assert_eq!(url.fragment, "top");
    }

    #[test]
    fn request_target_joins_path_and_query() {
        let url = Url::parse("http://example.com/search?q=rust");
        assert_eq!(url.request_target(), "/search?q=rust");

        let url = Url::parse("http://example.com/search");
        assert_eq!(url.request_target(), "/search");
    }

    #[test]
    fn canonical_string_round_trips() {
        for raw in [
            "https://api.example.com:8080/v1/users?page=1&limit=10#section",
            "http://example.com/",
            "https://example.com/a/b?x=1",
            "http://localhost:3000/health",
        ] {
            let url = Url::parse(raw);
            assert_eq!(Url::parse(&url.to_canonical_string()), url);
        }
    }

    #[test]
    fn empty_input_yields_empty_url() {
        let url = Url::parse("");
        assert_eq!(url.host, "");
        assert_eq!(url.path, "/");
        assert_eq!(url.port, 80);
    }
}
