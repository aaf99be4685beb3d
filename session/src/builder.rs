use std::{borrow::Cow, time::Duration};

use crate::config::SessionConfig;

/// Consuming builder for [`SessionConfig`]; anything not set keeps its default.
#[derive(Debug, Default)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cookie<C>(mut self, name: C) -> Self
    where
        C: Into<Cow<'static, str>>,
    {
        self.config.cookie_name = name.into();
        self
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.config.max_age = max_age;
        self
    }

    pub fn with_path<P>(mut self, path: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        self.config.path = path.into();
        self
    }

    pub fn with_redirect<R>(mut self, location: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        self.config.redirect_to = location.into();
        self
    }

    pub fn with_reset_flag<F, M>(mut self, field: F, marker: M) -> Self
    where
        F: Into<Cow<'static, str>>,
        M: Into<Cow<'static, str>>,
    {
        self.config.reset_field = field.into();
        self.config.reset_marker = marker.into();
        self
    }

    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.config.body_limit = limit;
        self
    }

    pub fn build(self) -> SessionConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_COOKIE_NAME, DEFAULT_MAX_AGE, DEFAULT_REDIRECT};

    #[test]
    fn test_defaults() {
        let config = SessionConfig::builder().build();

        assert_eq!(config.cookie_name(), DEFAULT_COOKIE_NAME);
        assert_eq!(config.max_age(), DEFAULT_MAX_AGE);
        assert_eq!(config.max_age().as_secs(), 86_400);
        assert_eq!(config.path(), "/");
        assert_eq!(config.redirect_to(), DEFAULT_REDIRECT);
        assert_eq!(config.reset_field(), "reset");
        assert_eq!(config.reset_marker(), "1");
    }

    #[test]
    fn test_overrides() {
        let config = SessionConfig::builder()
            .with_cookie("visits")
            .with_max_age(Duration::from_secs(60))
            .with_path("/judge")
            .with_redirect(String::from("/judge"))
            .with_reset_flag("forget", "yes")
            .with_body_limit(16)
            .build();

        assert_eq!(config.cookie_name(), "visits");
        assert_eq!(config.max_age(), Duration::from_secs(60));
        assert_eq!(config.path(), "/judge");
        assert_eq!(config.redirect_to(), "/judge");
        assert_eq!(config.reset_field(), "forget");
        assert_eq!(config.reset_marker(), "yes");
        assert_eq!(config.body_limit(), 16);
    }
}
