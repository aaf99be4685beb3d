use std::{borrow::Cow, time::Duration};

use cookie::{time::Duration as CookieDuration, Cookie};

use crate::encoding::url_encode;

/// Builds a single `Set-Cookie` header line.
///
/// The value is URL-encoded before it is written; the name is written as is.
#[derive(Debug, Clone)]
pub struct SetCookieBuilder {
    name: Cow<'static, str>,
    value: String,
    max_age: Option<Duration>,
    path: Option<Cow<'static, str>>,
    http_only: bool,
}

impl SetCookieBuilder {
    pub fn new<N, V>(name: N, value: V) -> Self
    where
        N: Into<Cow<'static, str>>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            value: value.into(),
            max_age: None,
            path: None,
            http_only: false,
        }
    }

    /// Deletion form: empty value and a `Max-Age` of zero.
    pub fn removal<N>(name: N) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Self::new(name, String::new()).with_max_age(Duration::ZERO)
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    pub fn with_path<P>(mut self, path: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        self.path = Some(path.into());
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn build(self) -> Cookie<'static> {
        let mut cookie = Cookie::new(self.name, url_encode(&self.value));
        if let Some(max_age) = self.max_age {
            let seconds = i64::try_from(max_age.as_secs()).unwrap_or(i64::MAX);
            cookie.set_max_age(CookieDuration::seconds(seconds));
        }
        if let Some(path) = self.path {
            cookie.set_path(path);
        }
        if self.http_only {
            cookie.set_http_only(true);
        }
        cookie
    }

    /// Renders the header value (everything after `Set-Cookie: `).
    pub fn to_header_string(self) -> String {
        // The value is already encoded, so plain `Display` is used instead of `encoded()`.
        self.build().to_string()
    }
}

/// Convenience wrapper building a `Set-Cookie` line in one call.
pub fn encode_set_cookie<N>(
    name: N,
    value: &str,
    max_age: Duration,
    path: &str,
    http_only: bool,
) -> String
where
    N: Into<Cow<'static, str>>,
{
    SetCookieBuilder::new(name, value)
        .with_max_age(max_age)
        .with_path(path.to_owned())
        .with_http_only(http_only)
        .to_header_string()
}
