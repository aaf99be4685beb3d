use std::fmt;

use crate::key::SessionKey;

/// Separator between the key and the visit count in the cookie value.
pub const TOKEN_SEPARATOR: char = ':';

/// The whole of a visitor's state, round-tripped through the session cookie as
/// `key:visits`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken {
    key: SessionKey,
    visits: u64,
}

impl SessionToken {
    pub fn new<K: Into<SessionKey>>(key: K, visits: u64) -> Self {
        Self {
            key: key.into(),
            visits,
        }
    }

    /// A token for a visitor we have never seen: fresh key, zero visits.
    pub fn fresh() -> Self {
        Self::new(SessionKey::generate(), 0)
    }

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn visits(&self) -> u64 {
        self.visits
    }

    /// Counts one more visit.
    #[must_use]
    pub fn increment(mut self) -> Self {
        self.visits = self.visits.saturating_add(1);
        self
    }

    /// Parses a decoded cookie value.
    ///
    /// Only a value splitting into exactly two parts on `:` is accepted, and the key part
    /// must not be empty. The count goes through [`coerce_visits`], so a garbage count
    /// yields a token with zero visits rather than `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(TOKEN_SEPARATOR);
        let (key, visits) = match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(visits), None) => (key, visits),
            _ => return None,
        };
        if key.is_empty() {
            return None;
        }
        Some(Self::new(key, coerce_visits(visits)))
    }
}

/// Serialized form, the inverse of [`SessionToken::parse`].
impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.key.as_str(), TOKEN_SEPARATOR, self.visits)
    }
}

/// Lenient visit-count parsing.
///
/// Leading whitespace and an optional `+` are skipped, then the longest run of leading
/// digits is read. No digits gives 0, a negative number gives 0, an overflowing number
/// saturates. This never fails.
pub fn coerce_visits(raw: &str) -> u64 {
    let raw = raw.trim_start();
    if raw.starts_with('-') {
        return 0;
    }
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    raw.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
        })
}
