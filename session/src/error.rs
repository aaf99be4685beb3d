use std::{error::Error as StdError, fmt::Write};

use axum_core::response::{IntoResponse, Response};
use http::{header::InvalidHeaderValue, StatusCode};

/// Failures at the HTTP edge of the session. Decoding a cookie never fails.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to read request body")]
    ReadBody(#[source] Box<dyn StdError + Send + Sync>),

    #[error("invalid `{name}` header value")]
    InvalidHeader {
        name: &'static str,
        #[source]
        source: InvalidHeaderValue,
    },
}

impl SessionError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ReadBody(_) => StatusCode::BAD_REQUEST,
            Self::InvalidHeader { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Turns a session error into the response sent to the client.
pub trait IntoErrorResponse {
    type Error: StdError + Send + Sync + 'static;

    fn into_error_response(self, error: Self::Error) -> Response;
}

/// Answers with the error's status and its message.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorHandler;

impl IntoErrorResponse for DefaultErrorHandler {
    type Error = SessionError;

    fn into_error_response(self, error: SessionError) -> Response {
        (error.status(), error.to_string()).into_response()
    }
}

/// Formats an error with all of its sources, `outer: inner: ...`.
pub fn log_error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        let _ = write!(message, ": {inner}");
        source = inner.source();
    }
    message
}

/// Rejection for the [`Visit`](crate::Visit) extractor when the session layer is not installed.
#[derive(Debug, thiserror::Error)]
#[error("Visit extension is missing. Is `SessionLayer` enabled?")]
pub struct MissingVisitExtension;

impl IntoResponse for MissingVisitExtension {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        let source = http::HeaderValue::from_str("a\nb").unwrap_err();
        assert_eq!(
            SessionError::InvalidHeader { name: "location", source }.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            SessionError::ReadBody("closed".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_log_error_chain() {
        let source = http::HeaderValue::from_str("a\nb").unwrap_err();
        let error = SessionError::InvalidHeader {
            name: "location",
            source,
        };

        let message = log_error_chain(&error);
        assert!(message.starts_with("invalid `location` header value: "));
        assert!(message.len() > "invalid `location` header value: ".len());
    }

    #[test]
    fn test_default_handler() {
        let response = DefaultErrorHandler.into_error_response(SessionError::ReadBody(
            "connection reset".into(),
        ));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
