//! Structured error types for configuration loading and the CLI.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration for {field}: {reason}")]
    Configuration { field: String, reason: String },

    #[error("unknown network '{name}'\n\nDeclared networks: {known}")]
    UnknownNetwork { name: String, known: String },

    #[error("'{0}' already exists")]
    ConfigExists(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    TomlParse(#[from] toml::de::Error),

    #[error(transparent)]
    JsonSerialize(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Builds a [`Error::Configuration`] for the given field path.
    pub fn config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Builds an [`Error::UnknownNetwork`] listing the declared names.
    pub fn unknown_network<'a>(name: &str, known: impl IntoIterator<Item = &'a str>) -> Self {
        let known: Vec<&str> = known.into_iter().collect();
        Self::UnknownNetwork {
            name: name.to_string(),
            known: if known.is_empty() {
                "(none)".to_string()
            } else {
                known.join(", ")
            },
        }
    }

    /// Returns true for missing or malformed configuration values.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Returns true for lookups of undeclared networks.
    pub fn is_unknown_network(&self) -> bool {
        matches!(self, Self::UnknownNetwork { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message_names_field() {
        let err = Error::config("networks.rinkeby.url (ENDPOINT_URL)", "variable is not set");
        assert_eq!(
            err.to_string(),
            "invalid configuration for networks.rinkeby.url (ENDPOINT_URL): variable is not set"
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn test_unknown_network_lists_known() {
        let err = Error::unknown_network("mainnet", ["goerli", "rinkeby"]);
        let msg = err.to_string();
        assert!(msg.contains("unknown network 'mainnet'"));
        assert!(msg.contains("goerli, rinkeby"));
        assert!(err.is_unknown_network());
    }

    #[test]
    fn test_unknown_network_without_declared() {
        let err = Error::unknown_network("rinkeby", std::iter::empty::<&str>());
        assert!(err.to_string().contains("(none)"));
    }
}
