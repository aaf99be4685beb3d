use std::fmt;

use http::Method;

/// Form field carrying the reset flag.
pub const RESET_FIELD: &str = "reset";
/// Value of [`RESET_FIELD`] that asks for the session to be dropped.
pub const RESET_MARKER: &str = "1";

/// Which path a single request takes through the session handler.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Decode, count, judge and re-issue the cookie.
    #[default]
    Normal,
    /// Clear the cookie and redirect, touching no session state.
    ResetRequested,
}

impl SessionState {
    /// Picks the state for a request.
    ///
    /// Only a `POST` whose form-encoded body has `field` equal to `marker` resets. A body
    /// that is not valid form data, a missing field or any other value is a normal visit.
    pub fn detect(method: &Method, body: &[u8], field: &str, marker: &str) -> Self {
        if method != Method::POST {
            return Self::Normal;
        }

        let Ok(form) = serde_urlencoded::from_bytes::<Vec<(String, String)>>(body) else {
            return Self::Normal;
        };

        // Repeated fields behave like a form decoder would: the last one counts.
        let flag = form
            .iter()
            .rev()
            .find_map(|(name, value)| (name == field).then_some(value.as_str()));

        match flag {
            Some(value) if value == marker => Self::ResetRequested,
            _ => Self::Normal,
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::ResetRequested => f.write_str("reset-requested"),
        }
    }
}
