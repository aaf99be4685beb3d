use std::{borrow::Cow, time::Duration};

use crate::{
    builder::SessionConfigBuilder,
    state::{RESET_FIELD, RESET_MARKER},
};

pub const DEFAULT_COOKIE_NAME: &str = "webserv_session";
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(3600 * 24);
pub const DEFAULT_COOKIE_PATH: &str = "/";
pub const DEFAULT_REDIRECT: &str = "/cgi-bin/judging.php";
pub const DEFAULT_BODY_LIMIT: usize = 8 * 1024;

/// Settings shared by every request the handler sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub(crate) cookie_name: Cow<'static, str>,
    pub(crate) max_age: Duration,
    pub(crate) path: Cow<'static, str>,
    pub(crate) redirect_to: Cow<'static, str>,
    pub(crate) reset_field: Cow<'static, str>,
    pub(crate) reset_marker: Cow<'static, str>,
    pub(crate) body_limit: usize,
}

impl SessionConfig {
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::new()
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Where the reset flow sends the browser.
    pub fn redirect_to(&self) -> &str {
        &self.redirect_to
    }

    pub fn reset_field(&self) -> &str {
        &self.reset_field
    }

    pub fn reset_marker(&self) -> &str {
        &self.reset_marker
    }

    /// Largest request body read when looking for the reset flag.
    pub fn body_limit(&self) -> usize {
        self.body_limit
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: Cow::Borrowed(DEFAULT_COOKIE_NAME),
            max_age: DEFAULT_MAX_AGE,
            path: Cow::Borrowed(DEFAULT_COOKIE_PATH),
            redirect_to: Cow::Borrowed(DEFAULT_REDIRECT),
            reset_field: Cow::Borrowed(RESET_FIELD),
            reset_marker: Cow::Borrowed(RESET_MARKER),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}
