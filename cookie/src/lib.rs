//! Cookie plumbing for the judging session: decoding a request `Cookie` header into a
//! [`CookieJar`] and building `Set-Cookie` lines.
//!
//! Decoding is deliberately lenient. Segments that are not `name=value` are dropped and
//! nothing here ever fails.

use http::{header, HeaderMap};

mod builder;
mod encoding;
mod map;

pub use builder::{encode_set_cookie, SetCookieBuilder};
pub use encoding::{url_decode, url_encode};
pub use map::{CookieKey, CookieMap};

/// Per-request cookies, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    map: CookieMap,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a raw `Cookie` header line.
    ///
    /// The line is split on `"; "`, each pair on its first `=`. Names are trimmed,
    /// values are trimmed and URL-decoded. Pairs without `=` are skipped and the last
    /// occurrence of a name wins.
    pub fn from_header(value: &str) -> Self {
        let map = value
            .split("; ")
            .filter_map(|pair| pair.split_once('='))
            .map(|(name, value)| (name.trim().to_owned(), url_decode(value.trim())))
            .collect();
        Self { map }
    }

    /// Decodes every `Cookie` header of a request, in order.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        cookie_header_line(headers)
            .map(|line| Self::from_header(&line))
            .unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn into_map(self) -> CookieMap {
        self.map
    }
}

/// All `Cookie` headers of a request joined into one line, or `None` without any.
///
/// HTTP/2 clients may split cookies over several headers; joining them with `"; "`
/// gives the line [`CookieJar::from_header`] expects.
pub fn cookie_header_line(headers: &HeaderMap) -> Option<String> {
    let values: Vec<_> = headers
        .get_all(header::COOKIE)
        .into_iter()
        .filter_map(|value| value.to_str().ok())
        .collect();

    (!values.is_empty()).then(|| values.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_segment_dropped() {
        let jar = CookieJar::from_header("a=1; b=2; malformed; c=3");

        let expected: CookieMap = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(jar.into_map(), expected);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let jar = CookieJar::from_header("id=first; other=x; id=second");
        assert_eq!(jar.get("id"), Some("second"));
        assert_eq!(jar.len(), 2);
    }

    #[test]
    fn test_splits_on_first_equals() {
        let jar = CookieJar::from_header("token=a=b=c");
        assert_eq!(jar.get("token"), Some("a=b=c"));
    }

    #[test]
    fn test_value_decoded_and_name_trimmed() {
        let jar = CookieJar::from_header(" webserv_session =sess_0123456789abcdef%3A4");
        assert_eq!(jar.get("webserv_session"), Some("sess_0123456789abcdef:4"));
    }

    #[test]
    fn test_empty_header() {
        assert!(CookieJar::from_header("").is_empty());
        assert!(CookieJar::from_headers(&HeaderMap::new()).is_empty());
    }

    #[test]
    fn test_cookie_header_line() {
        let mut headers = HeaderMap::new();
        assert_eq!(cookie_header_line(&headers), None);

        headers.append(header::COOKIE, "a=1".parse().unwrap());
        headers.append(header::COOKIE, "b=2".parse().unwrap());
        assert_eq!(cookie_header_line(&headers).as_deref(), Some("a=1; b=2"));
    }

    #[test]
    fn test_from_headers_joins_lines() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, "a=1; b=2".parse().unwrap());
        headers.append(header::COOKIE, "b=3".parse().unwrap());

        let jar = CookieJar::from_headers(&headers);
        assert_eq!(jar.get("a"), Some("1"));
        assert_eq!(jar.get("b"), Some("3"));
    }
}
