//! URL query string parsing.
//!
//! The shop identity usually arrives as query parameters on the page URL
//! after the OAuth redirect, so this is the first thing an embedded app
//! evaluates on load.

use std::borrow::Cow;
use std::collections::HashMap;

/// Parse a URL query string into a key/value map.
///
/// Accepts the string with or without the leading `?`. Following the
/// form-encoding convention, `+` is replaced with a space before
/// percent-decoding keys and values. Duplicate keys: last occurrence wins.
/// Pure and idempotent.
pub fn parse_query(raw: &str) -> HashMap<String, String> {
    let qs = raw.strip_prefix('?').unwrap_or(raw).replace('+', " ");

    let mut params = HashMap::new();
    for pair in qs.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key.is_empty() {
            continue;
        }
        params.insert(decode(key), decode(value));
    }
    params
}

/// Percent-decode, falling back to the raw text on malformed escapes.
fn decode(s: &str) -> String {
    urlencoding::decode(s)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_pairs() {
        let params = parse_query("shop=foo.myshopify.com&hmac=abc");
        assert_eq!(params["shop"], "foo.myshopify.com");
        assert_eq!(params["hmac"], "abc");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_plus_is_a_space() {
        let params = parse_query("shop=foo+bar&x=1");
        assert_eq!(params["shop"], "foo bar");
        assert_eq!(params["x"], "1");
    }

    #[test]
    fn test_percent_decoding() {
        let params = parse_query("redirect=%2Fapps%2Facme&name=caf%C3%A9");
        assert_eq!(params["redirect"], "/apps/acme");
        assert_eq!(params["name"], "café");
    }

    #[test]
    fn test_leading_question_mark() {
        let params = parse_query("?shop=foo");
        assert_eq!(params["shop"], "foo");
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let params = parse_query("shop=first&shop=second");
        assert_eq!(params["shop"], "second");
    }

    #[test]
    fn test_key_without_value() {
        let params = parse_query("embedded&shop=foo");
        assert_eq!(params["embedded"], "");
        assert_eq!(params["shop"], "foo");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }

    #[test]
    fn test_malformed_escape_falls_back_to_raw() {
        let params = parse_query("x=%zz");
        assert_eq!(params["x"], "%zz");
    }
}
