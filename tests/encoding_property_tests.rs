//! Property-based tests for the percent codec and query-string builder.

use fasthttp::{build_query_string, percent_decode, percent_encode};
use proptest::prelude::*;

/// Strategy for strings mixing ASCII, reserved characters, and multibyte
/// UTF-8, the inputs a URL component realistically carries.
fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9._~-]{0,40}",
        "[ -~]{0,40}",
        "\\PC{0,20}",
    ]
}

fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// *For any* string, decoding its encoding yields the original. This
    /// holds even for `+`, which encode escapes as `%2B` while decode maps
    /// a literal `+` to space.
    #[test]
    fn prop_decode_inverts_encode(s in component_strategy()) {
        prop_assert_eq!(percent_decode(&percent_encode(&s)), s);
    }

    /// *For any* input, the encoded output contains only unreserved
    /// characters and uppercase percent escapes.
    #[test]
    fn prop_encoded_alphabet_is_url_safe(s in component_strategy()) {
        let encoded = percent_encode(&s);
        let mut chars = encoded.chars();
        while let Some(c) = chars.next() {
            if c == '%' {
                let hi = chars.next();
                let lo = chars.next();
                prop_assert!(
                    matches!(hi, Some(h) if h.is_ascii_hexdigit() && !h.is_ascii_lowercase()),
                    "bad hex digit after %% in {:?}", encoded
                );
                prop_assert!(
                    matches!(lo, Some(l) if l.is_ascii_hexdigit() && !l.is_ascii_lowercase()),
                    "bad hex digit after %% in {:?}", encoded
                );
            } else {
                prop_assert!(is_unreserved(c), "unescaped {:?} in {:?}", c, encoded);
            }
        }
    }

    /// *For any* already-unreserved string, encoding is the identity.
    #[test]
    fn prop_unreserved_passes_through(s in "[a-zA-Z0-9._~-]{0,40}") {
        prop_assert_eq!(percent_encode(&s), s);
    }

    /// *For any* key/value pairs, the query string has one `k=v` segment
    /// per pair, joined by `&`, with both sides encoded.
    #[test]
    fn prop_query_string_structure(
        pairs in proptest::collection::btree_map("[a-z]{1,8}", "[ -~]{0,16}", 0..6)
    ) {
        let query = build_query_string(&pairs);
        if pairs.is_empty() {
            prop_assert_eq!(query, "");
        } else {
            let segments: Vec<&str> = query.split('&').collect();
            prop_assert_eq!(segments.len(), pairs.len());
            for (segment, (key, value)) in segments.iter().zip(&pairs) {
                prop_assert_eq!(
                    *segment,
                    format!("{}={}", percent_encode(key), percent_encode(value))
                );
            }
        }
    }
}

#[test]
fn plus_decodes_to_space() {
    assert_eq!(percent_decode("a+b"), "a b");
}

#[test]
fn malformed_escapes_pass_through() {
    assert_eq!(percent_decode("100%"), "100%");
    assert_eq!(percent_decode("%2"), "%2");
}
