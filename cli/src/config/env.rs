//! Environment lookup capability.
//!
//! Loading takes an [`Environment`] instead of reading `std::env` directly so
//! tests can resolve descriptors from a fixed map.

use std::collections::HashMap;

/// Key-value lookup used to resolve environment-backed settings.
pub trait Environment {
    /// Returns the raw value of `key`, or `None` if it is not set.
    fn raw_var(&self, key: &str) -> Option<String>;

    /// Returns the value of `key`, treating blank values as unset.
    fn var(&self, key: &str) -> Option<String> {
        self.raw_var(key).filter(|v| !v.trim().is_empty())
    }
}

/// The process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }

    /// Loads `.env` from the current directory before reading the process
    /// environment. Variables already set take precedence over the file.
    pub fn with_dotenv() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded dotenv file"),
            Err(e) if e.not_found() => tracing::debug!("no .env file found"),
            Err(e) => tracing::warn!(error = %e, "failed to read .env file"),
        }
        Self
    }
}

impl Environment for ProcessEnv {
    fn raw_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// An in-memory environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MapEnv(HashMap<String, String>);

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a variable.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Environment for MapEnv {
    fn raw_var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

impl Environment for HashMap<String, String> {
    fn raw_var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn raw_var(&self, key: &str) -> Option<String> {
        (**self).raw_var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().with("ENDPOINT_URL", "https://example.org");
        assert_eq!(env.var("ENDPOINT_URL").as_deref(), Some("https://example.org"));
        assert_eq!(env.var("SIGNING_KEY"), None);
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let env: MapEnv = [("SIGNING_KEY", "   ")].into_iter().collect();
        assert_eq!(env.raw_var("SIGNING_KEY").as_deref(), Some("   "));
        assert_eq!(env.var("SIGNING_KEY"), None);
    }

    #[test]
    fn test_hash_map_is_an_environment() {
        let mut map = HashMap::new();
        map.insert("A".to_string(), "1".to_string());
        assert_eq!(map.var("A").as_deref(), Some("1"));
    }
}
