use std::sync::Arc;

use tower_layer::Layer;

use crate::{
    error::{DefaultErrorHandler, IntoErrorResponse},
    SessionConfig, SessionHandler,
};

use super::{builder::SessionLayerBuilder, SessionMiddleware};

#[derive(Debug, Clone)]
pub struct SessionLayer<H = DefaultErrorHandler>
where
    H: IntoErrorResponse,
{
    handler: Arc<SessionHandler>,
    error_handler: H,
}

impl SessionLayer<DefaultErrorHandler> {
    pub fn builder() -> SessionLayerBuilder<DefaultErrorHandler> {
        SessionLayerBuilder {
            config: SessionConfig::default(),
            error_handler: DefaultErrorHandler,
        }
    }
}

impl Default for SessionLayer<DefaultErrorHandler> {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl<H> SessionLayer<H>
where
    H: IntoErrorResponse,
{
    pub fn new(config: SessionConfig, error_handler: H) -> Self {
        Self {
            handler: Arc::new(SessionHandler::new(config)),
            error_handler,
        }
    }

    pub fn handler(&self) -> &SessionHandler {
        &self.handler
    }
}

impl<S, H> Layer<S> for SessionLayer<H>
where
    H: IntoErrorResponse + Clone,
{
    type Service = SessionMiddleware<S, H>;

    fn layer(&self, inner: S) -> Self::Service {
        SessionMiddleware::new(
            inner,
            Arc::clone(&self.handler),
            self.error_handler.clone(),
        )
    }
}
