//! Multipart form encoding.

use std::collections::BTreeMap;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// A `multipart/form-data` body under construction.
///
/// The boundary is derived from a monotonic clock plus a per-process
/// counter at construction, which keeps collisions with body content
/// unlikely without being cryptographically unique. Encoding is
/// deterministic for a given set of fields (iteration follows the map's
/// key order) and always terminates with the closing `--boundary--`
/// delimiter.
#[derive(Debug, Clone)]
pub struct FormData {
    fields: BTreeMap<String, String>,
    boundary: String,
}

/// Monotonic nanoseconds since first use, never stepping backwards. The
/// counter breaks ties between forms created within one clock tick.
fn next_boundary() -> String {
    static START: OnceLock<Instant> = OnceLock::new();
    static SEQUENCE: AtomicU64 = AtomicU64::new(0);

    let nanos = START.get_or_init(Instant::now).elapsed().as_nanos();
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("----FastHttpBoundary{nanos}.{seq}")
}

impl FormData {
    /// Creates an empty form with a freshly generated boundary.
    #[must_use]
    pub fn new() -> Self {
        FormData {
            fields: BTreeMap::new(),
            boundary: next_boundary(),
        }
    }

    /// Adds or replaces a text field. Fluent.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The generated boundary string.
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// `Content-Type` header value carrying the boundary.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Serializes all fields into the multipart wire format.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in &self.fields {
            body.extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            );
            body.extend_from_slice(value.as_bytes());
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        body
    }
}

impl Default for FormData {
    fn default() -> Self {
        FormData::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_deterministic_and_ordered() {
        let form = FormData::new().field("b", "2").field("a", "1");
        let first = form.encode();
        let second = form.encode();
        assert_eq!(first, second);

        let text = String::from_utf8(first).unwrap();
        let a_pos = text.find("name=\"a\"").unwrap();
        let b_pos = text.find("name=\"b\"").unwrap();
        assert!(a_pos < b_pos);
    }

    #[test]
    fn encode_ends_with_closing_delimiter() {
        let form = FormData::new().field("k", "v");
        let text = String::from_utf8(form.encode()).unwrap();
        assert!(text.ends_with(&format!("--{}--\r\n", form.boundary())));
    }

    #[test]
    fn empty_form_is_just_the_closing_delimiter() {
        let form = FormData::new();
        let text = String::from_utf8(form.encode()).unwrap();
        assert_eq!(text, format!("--{}--\r\n", form.boundary()));
    }

    #[test]
    fn boundaries_are_distinct_per_form() {
        let first = FormData::new();
        let second = FormData::new();
        assert_ne!(first.boundary(), second.boundary());
    }

    #[test]
    fn content_type_carries_the_boundary() {
        let form = FormData::new();
        assert_eq!(
            form.content_type(),
            format!("multipart/form-data; boundary={}", form.boundary())
        );
    }

    #[test]
    fn field_replaces_on_same_name() {
        let form = FormData::new().field("k", "old").field("k", "new");
        let text = String::from_utf8(form.encode()).unwrap();
        assert!(text.contains("new"));
        assert!(!text.contains("old"));
    }
}
