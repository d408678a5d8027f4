//! Project file discovery and descriptor loading.

pub mod env;
pub mod types;

use {
    crate::{constants::CHAINCONF_TOML, descriptor::ConfigurationDescriptor, Error, Result},
    std::path::{Path, PathBuf},
};
pub use {
    env::{Environment, MapEnv, ProcessEnv},
    types::ProjectFile,
};

/// Reads the project file.
///
/// An explicit path must exist. Without one, `Chainconf.toml` in the current
/// directory is used if present, otherwise the built-in defaults.
///
/// # Errors
/// Returns an error if the file is missing (explicit path only), unreadable,
/// or malformed.
pub fn load_file(path: Option<&Path>) -> Result<ProjectFile> {
    let path = match path {
        Some(path) if !path.exists() => {
            return Err(Error::Other(anyhow::anyhow!(
                "config file not found: {}",
                path.display()
            )))
        }
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(CHAINCONF_TOML);
            if !default.exists() {
                tracing::debug!("no {CHAINCONF_TOML} found, using defaults");
                return Ok(ProjectFile::default());
            }
            default
        }
    };

    tracing::debug!(path = %path.display(), "reading project file");
    let content = std::fs::read_to_string(&path)?;
    parse(&content)
}

/// Parses project file contents.
///
/// # Errors
/// Returns an error if the TOML is malformed or has unknown keys.
pub fn parse(content: &str) -> Result<ProjectFile> {
    Ok(toml::from_str(content)?)
}

/// Loads the descriptor from the project file and the process environment,
/// after reading `.env` if one exists.
///
/// # Errors
/// Returns an error if the project file or any referenced variable is
/// missing or invalid.
pub fn load(path: Option<&Path>) -> Result<ConfigurationDescriptor> {
    let file = load_file(path)?;
    ConfigurationDescriptor::load(&file, &ProcessEnv::with_dotenv())
}

#[cfg(test)]
mod tests {
    use {super::*, std::io::Write, super::types::DEFAULT_NETWORK};

    #[test]
    fn test_default_config() {
        let config = ProjectFile::default();
        assert_eq!(config.compiler.version, "0.6.12");
        assert_eq!(config.networks.len(), 1);
        let rinkeby = &config.networks[DEFAULT_NETWORK];
        assert_eq!(rinkeby.url_env, "ENDPOINT_URL");
        assert_eq!(rinkeby.accounts_env, vec!["SIGNING_KEY"]);
        assert!(config.reporting.enabled);
        assert_eq!(config.reporting.currency, "YCoin");
        assert_eq!(config.reporting.gas_price, 21.0);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(parse("").unwrap(), ProjectFile::default());
    }

    #[test]
    fn test_config_parsing() {
        let toml_str = r#"
[compiler]
version = "0.8.24"

[networks.sepolia]
url_env = "SEPOLIA_URL"
accounts_env = ["DEPLOYER_KEY", "OPERATOR_KEY"]

[networks.local]

[reporting]
enabled = false
currency = "EUR"
gas_price = 3.5
"#;
        let config = parse(toml_str).unwrap();
        assert_eq!(config.compiler.version, "0.8.24");
        assert_eq!(config.networks.len(), 2);
        assert!(!config.networks.contains_key(DEFAULT_NETWORK));
        assert_eq!(
            config.networks["sepolia"].accounts_env,
            vec!["DEPLOYER_KEY", "OPERATOR_KEY"]
        );
        assert_eq!(config.networks["local"].url_env, "ENDPOINT_URL");
        assert!(!config.reporting.enabled);
        assert_eq!(config.reporting.currency, "EUR");
        assert_eq!(config.reporting.gas_price, 3.5);
    }

    #[test]
    fn test_integer_gas_price() {
        let config = parse("[reporting]\ngas_price = 21\n").unwrap();
        assert_eq!(config.reporting.gas_price, 21.0);
        assert_eq!(config.reporting.currency, "YCoin");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = parse("[compiler]\nversoin = \"0.8.0\"\n").unwrap_err();
        assert!(err.to_string().contains("versoin"));
    }

    #[test]
    fn test_referenced_vars_deduplicated() {
        let config = parse(
            r#"
[networks.a]
url_env = "A_URL"
accounts_env = ["KEY"]

[networks.b]
url_env = "B_URL"
accounts_env = ["KEY", "B_KEY"]
"#,
        )
        .unwrap();
        assert_eq!(config.referenced_vars(), vec!["A_URL", "KEY", "B_URL", "B_KEY"]);
    }

    #[test]
    fn test_load_file_explicit_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_file(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn test_load_file_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[compiler]\nversion = \"0.7.6\"").unwrap();
        let config = load_file(Some(file.path())).unwrap();
        assert_eq!(config.compiler.version, "0.7.6");
        assert_eq!(config.networks.len(), 1);
    }
}
