//! Cookie value object and `Set-Cookie` grammar.

use std::fmt;

/// A single HTTP cookie with its recognized attributes.
///
/// All fields default to empty/false. Parsing is best-effort and never
/// fails; serialization via `Display` emits attributes in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookie {
    /// Cookie name, trimmed.
    pub name: String,
    /// Cookie value, trimmed.
    pub value: String,
    /// `Domain` attribute.
    pub domain: String,
    /// `Path` attribute.
    pub path: String,
    /// `Secure` flag.
    pub secure: bool,
    /// `HttpOnly` flag.
    pub http_only: bool,
    /// `SameSite` attribute.
    pub same_site: String,
}

impl Cookie {
    /// Creates a cookie with just a name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Cookie {
            name: name.into(),
            value: value.into(),
            ..Cookie::default()
        }
    }

    /// Parses a single `Set-Cookie` header value. Never fails.
    ///
    /// The first `;`-separated segment sets name/value (split on the first
    /// `=`, both sides trimmed). Subsequent segments set recognized
    /// attributes by case-sensitive keyword match; anything unrecognized is
    /// silently ignored, and malformed input yields whatever prefix was
    /// parseable.
    #[must_use]
    pub fn parse(header_value: &str) -> Cookie {
        let mut cookie = Cookie::default();
        let mut segments = header_value.split(';');

        if let Some(first) = segments.next() {
            if let Some(eq) = first.find('=') {
                cookie.name = first[..eq].trim().to_string();
                cookie.value = first[eq + 1..].trim().to_string();
            }
        }

        for segment in segments {
            let segment = segment.trim();
            if let Some(domain) = segment.strip_prefix("Domain=") {
                cookie.domain = domain.to_string();
            } else if let Some(path) = segment.strip_prefix("Path=") {
                cookie.path = path.to_string();
            } else if segment == "Secure" {
                cookie.secure = true;
            } else if segment == "HttpOnly" {
                cookie.http_only = true;
            } else if let Some(same_site) = segment.strip_prefix("SameSite=") {
                cookie.same_site = same_site.to_string();
            }
        }

        cookie
    }
}

impl fmt::Display for Cookie {
    /// Serializes `name=value` plus any non-empty attribute in the order
    /// Domain, Path, Secure, HttpOnly, SameSite.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        if !self.domain.is_empty() {
            write!(f, "; Domain={}", self.domain)?;
        }
        if !self.path.is_empty() {
            write!(f, "; Path={}", self.path)?;
        }
        if self.secure {
            write!(f, "; Secure")?;
        }
        if self.http_only {
            write!(f, "; HttpOnly")?;
        }
        if !self.same_site.is_empty() {
            write!(f, "; SameSite={}", self.same_site)?;
        }
        Ok(())
    }
}
