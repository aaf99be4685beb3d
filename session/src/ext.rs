use axum_core::extract::Request;
use http::request::Parts;

use crate::Visit;

/// Access to the [`Visit`] the session layer stored on a request.
pub trait RequestVisitExt {
    fn visit(&self) -> Option<Visit>;
    fn take_visit(&mut self) -> Option<Visit>;
}

impl RequestVisitExt for Request {
    fn visit(&self) -> Option<Visit> {
        self.extensions().get::<Visit>().cloned()
    }

    fn take_visit(&mut self) -> Option<Visit> {
        self.extensions_mut().remove::<Visit>()
    }
}

impl RequestVisitExt for Parts {
    fn visit(&self) -> Option<Visit> {
        self.extensions.get::<Visit>().cloned()
    }

    fn take_visit(&mut self) -> Option<Visit> {
        self.extensions.remove::<Visit>()
    }
}
