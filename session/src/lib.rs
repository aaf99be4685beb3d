//! Client-carried visit counting.
//!
//! All state lives in one cookie holding `key:visits`. Each request either resets the
//! session (a `POST` with the reset flag, answered by a redirect that deletes the cookie)
//! or counts one more visit and re-issues the cookie. The cookie is not signed, so a
//! visitor can edit their own count.

pub mod builder;
pub mod config;
pub mod error;
pub mod ext;
mod handler;
pub mod judgment;
mod key;
pub mod middleware;
mod state;
mod token;

pub use config::SessionConfig;
pub use handler::{SessionHandler, SessionRequest, SessionResponse};
pub use judgment::judge;
pub use key::{SessionKey, KEY_PREFIX};
pub use state::{SessionState, RESET_FIELD, RESET_MARKER};
pub use token::{coerce_visits, SessionToken, TOKEN_SEPARATOR};

use axum_core::extract::FromRequestParts;
use error::MissingVisitExtension;
use ext::RequestVisitExt;
use http::request::Parts;

/// The outcome of a counted visit, handed to whatever renders the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    token: SessionToken,
    judgment: &'static str,
}

impl Visit {
    pub fn new(token: SessionToken) -> Self {
        let judgment = judge(token.visits());
        Self { token, judgment }
    }

    pub fn key(&self) -> &SessionKey {
        self.token.key()
    }

    pub fn visits(&self) -> u64 {
        self.token.visits()
    }

    pub fn judgment(&self) -> &'static str {
        self.judgment
    }

    pub fn token(&self) -> &SessionToken {
        &self.token
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for Visit
where
    S: Send + Sync + 'static,
{
    type Rejection = MissingVisitExtension;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts.visit().ok_or(MissingVisitExtension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_judgment_follows_count() {
        let visit = Visit::new(SessionToken::new("sess_a", 31));
        assert_eq!(visit.judgment(), judgment::CODEPENDENT);
        assert_eq!(visit.visits(), 31);
        assert_eq!(visit.key().as_str(), "sess_a");
        assert_eq!(visit.token().to_string(), "sess_a:31");
    }

    #[tokio::test]
    async fn test_extractor_without_layer() {
        let (mut parts, ()) = http::Request::new(()).into_parts();
        let result = Visit::from_request_parts(&mut parts, &()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_extractor_with_visit() {
        let visit = Visit::new(SessionToken::new("sess_b", 2));
        let (mut parts, ()) = http::Request::new(()).into_parts();
        parts.extensions.insert(visit.clone());

        let extracted = Visit::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted, visit);
    }
}
