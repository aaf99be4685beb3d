use std::{
    fmt,
    ops::Deref,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use rand::Rng;
use sha2::{Digest, Sha256};

/// Tag put in front of every generated key so sessions are easy to spot in logs.
pub const KEY_PREFIX: &str = "sess_";

/// Number of hex characters kept from the digest.
const KEY_HEX_LEN: usize = 16;

/// Opaque session identifier carried in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey(Arc<str>);

impl SessionKey {
    pub fn new<K: Into<Arc<str>>>(key: K) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Mints a fresh key: a digest of the current time and a random salt, cut down to
    /// 16 hex characters and prefixed with [`KEY_PREFIX`].
    ///
    /// The result never contains `:` and needs no escaping inside a cookie value.
    pub fn generate() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        let salt: u64 = rand::thread_rng().gen();

        let mut hasher = Sha256::new();
        hasher.update(nanos.to_le_bytes());
        hasher.update(salt.to_le_bytes());
        let digest = hasher.finalize();

        let hex = hex::encode(&digest[..KEY_HEX_LEN / 2]);
        Self::new(format!("{KEY_PREFIX}{hex}"))
    }
}

impl Deref for SessionKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for SessionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionKey {
    fn from(val: String) -> Self {
        SessionKey::new(val)
    }
}

impl From<&str> for SessionKey {
    fn from(val: &str) -> Self {
        SessionKey::new(val)
    }
}

impl From<SessionKey> for String {
    fn from(val: SessionKey) -> Self {
        val.0.to_string()
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.0.as_ref();
        if key.len() > 24 && key.is_ascii() {
            write!(f, "{}...{}", &key[..8], &key[key.len() - 8..])
        } else {
            write!(f, "{}", key)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generated_shape() {
        let key = SessionKey::generate();

        assert_eq!(key.len(), KEY_PREFIX.len() + KEY_HEX_LEN);
        assert!(key.starts_with(KEY_PREFIX));
        assert!(key.as_str()[KEY_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(!key.contains(':'));
    }

    #[test]
    fn test_generated_keys_are_unique() {
        let keys: HashSet<_> = (0..10_000).map(|_| SessionKey::generate()).collect();
        assert_eq!(keys.len(), 10_000);
    }

    #[test]
    fn test_display_truncates_long_keys() {
        let key = SessionKey::from("abcdefgh0123456789xyzXYZ-tail1234");
        assert_eq!(key.to_string(), "abcdefgh...tail1234");

        let key = SessionKey::from("sess_0123456789abcdef");
        assert_eq!(key.to_string(), "sess_0123456789abcdef");
    }
}
