use std::{borrow::Cow, time::Duration};

use crate::{
    error::{IntoErrorResponse, SessionError},
    SessionConfig,
};

use super::layer::SessionLayer;

#[derive(Debug)]
pub struct SessionLayerBuilder<H>
where
    H: IntoErrorResponse,
{
    pub(crate) config: SessionConfig,
    pub(crate) error_handler: H,
}

impl<H> SessionLayerBuilder<H>
where
    H: IntoErrorResponse<Error = SessionError>,
{
    pub fn with_error_handler<HState>(self, handler: HState) -> SessionLayerBuilder<HState>
    where
        HState: IntoErrorResponse<Error = SessionError>,
    {
        SessionLayerBuilder {
            config: self.config,
            error_handler: handler,
        }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
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

    pub fn with_redirect<R>(mut self, location: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        self.config.redirect_to = location.into();
        self
    }

    pub fn build(self) -> SessionLayer<H> {
        SessionLayer::new(self.config, self.error_handler)
    }
}
