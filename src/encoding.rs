//! Percent-encoding codec for query strings and form bodies.
//!
//! Encoding is strict percent-encoding (space becomes `%20`); decoding
//! additionally accepts the form-encoding convention of `+` for space.
//! The asymmetry is deliberate: `percent_encode` never emits `+`, so
//! `percent_decode(percent_encode(s)) == s` holds for every string.

/// Percent-encodes a string.
///
/// Unreserved characters (ASCII letters, digits, `-`, `_`, `.`, `~`) pass
/// through; every other byte of the UTF-8 encoding becomes uppercase-hex
/// `%XX`.
#[must_use]
pub fn percent_encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        if is_unreserved(byte) {
            encoded.push(byte as char);
        } else {
            encoded.push('%');
            encoded.push(hex_digit(byte >> 4));
            encoded.push(hex_digit(byte & 0x0F));
        }
    }
    encoded
}

/// Decodes `%XX` escapes and converts `+` to space.
///
/// Malformed escapes (fewer than two hex digits remaining, or non-hex
/// digits) are passed through verbatim rather than rejected.
#[must_use]
pub fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        decoded.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        decoded.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            byte => {
                decoded.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

/// Builds a query string from key/value pairs in their given order.
///
/// Each pair is emitted as `encode(key)=encode(value)`, joined with `&`.
pub fn build_query_string<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    for (key, value) in params {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(&percent_encode(key.as_ref()));
        out.push('=');
        out.push_str(&percent_encode(value.as_ref()));
    }
    out
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

fn hex_digit(nibble: u8) -> char {
    match nibble {
        0..=9 => (b'0' + nibble) as char,
        _ => (b'A' + nibble - 10) as char,
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(percent_encode("AZaz09-_.~"), "AZaz09-_.~");
    }

    #[test]
    fn space_encodes_as_percent_20() {
        assert_eq!(percent_encode("x y"), "x%20y");
    }

    #[test]
    fn reserved_characters_use_uppercase_hex() {
        assert_eq!(percent_encode("a/b?c=d&e"), "a%2Fb%3Fc%3Dd%26e");
    }

    #[test]
    fn multibyte_utf8_encodes_per_byte() {
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    fn plus_decodes_to_space() {
        assert_eq!(percent_decode("x+y"), "x y");
        assert_eq!(percent_decode("x%20y"), "x y");
    }

    #[test]
    fn truncated_escape_passes_through() {
        assert_eq!(percent_decode("abc%"), "abc%");
        assert_eq!(percent_decode("abc%2"), "abc%2");
    }

    #[test]
    fn non_hex_escape_passes_through() {
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    fn query_string_follows_map_order() {
        let mut params = BTreeMap::new();
        params.insert("b", "x y");
        params.insert("a", "1");
        assert_eq!(build_query_string(&params), "a=1&b=x%20y");
    }

    #[test]
    fn empty_map_yields_empty_query() {
        let params: BTreeMap<&str, &str> = BTreeMap::new();
        assert_eq!(build_query_string(&params), "");
    }
}
