use std::{borrow::Cow, collections::HashMap};

pub type CookieKey = Cow<'static, str>;

/// Name to value mapping parsed out of a single request.
///
/// Inserting a name that is already present replaces the previous value, so a jar
/// filled in header order keeps the last occurrence of a duplicated name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieMap {
    data: HashMap<CookieKey, String>,
}

impl CookieMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<CookieKey>,
        V: Into<String>,
    {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for CookieMap
where
    K: Into<CookieKey>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces() {
        let mut map = CookieMap::new();
        map.insert("theme", "dark").insert("theme", "light");

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("theme"), Some("light"));
    }

    #[test]
    fn test_from_iter_keeps_last() {
        let map: CookieMap = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
        assert_eq!(map.get("a"), Some("3"));
        assert_eq!(map.get("b"), Some("2"));
        assert!(!map.has("c"));
    }
}
