//! Tower middleware running every request through a [`SessionHandler`].
//!
//! Reset requests are answered here with the redirect and never reach the inner
//! service. Everything else gets a [`Visit`](crate::Visit) in its extensions and the
//! refreshed session cookie on its response.

use std::sync::Arc;

use crate::{error::IntoErrorResponse, SessionHandler};

mod builder;
mod cookie;
mod layer;
mod service;

pub use builder::SessionLayerBuilder;
pub use layer::SessionLayer;

#[derive(Debug, Clone)]
pub struct SessionMiddleware<S, H>
where
    H: IntoErrorResponse,
{
    inner: S,
    handler: Arc<SessionHandler>,
    error_handler: H,
}

impl<S, H> SessionMiddleware<S, H>
where
    H: IntoErrorResponse,
{
    pub fn new(inner: S, handler: Arc<SessionHandler>, error_handler: H) -> Self {
        Self {
            inner,
            handler,
            error_handler,
        }
    }
}
