use http::HeaderMap;

/// Appends every header, keeping values the inner service already set.
pub(crate) fn append_headers(target: &mut HeaderMap, headers: &HeaderMap) {
    for (name, value) in headers {
        target.append(name.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use http::{header, HeaderValue};

    use super::*;

    #[test]
    fn test_append_keeps_existing() {
        let mut target = HeaderMap::new();
        target.append(header::SET_COOKIE, HeaderValue::from_static("theme=dark"));

        let mut extra = HeaderMap::new();
        extra.append(header::SET_COOKIE, HeaderValue::from_static("id=1"));
        append_headers(&mut target, &extra);

        assert_eq!(target.get_all(header::SET_COOKIE).iter().count(), 2);
    }
}
