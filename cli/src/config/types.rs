//! Project file (`Chainconf.toml`) type definitions.

use {serde::Deserialize, std::collections::BTreeMap};

pub const DEFAULT_COMPILER_VERSION: &str = "0.6.12";
pub const DEFAULT_NETWORK: &str = "rinkeby";
pub const DEFAULT_URL_ENV: &str = "ENDPOINT_URL";
pub const DEFAULT_ACCOUNTS_ENV: &str = "SIGNING_KEY";
pub const DEFAULT_CURRENCY: &str = "YCoin";
pub const DEFAULT_GAS_PRICE: f64 = 21.0;

/// Static part of the configuration, before environment resolution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectFile {
    #[serde(default)]
    pub compiler: CompilerSection,

    #[serde(default = "default_networks")]
    pub networks: BTreeMap<String, NetworkSection>,

    #[serde(default)]
    pub reporting: ReportingSection,
}

impl Default for ProjectFile {
    fn default() -> Self {
        Self {
            compiler: CompilerSection::default(),
            networks: default_networks(),
            reporting: ReportingSection::default(),
        }
    }
}

impl ProjectFile {
    /// Every environment variable the file references, in declaration order
    /// with duplicates removed.
    pub fn referenced_vars(&self) -> Vec<&str> {
        let mut vars: Vec<&str> = Vec::new();
        for network in self.networks.values() {
            for var in std::iter::once(&network.url_env).chain(&network.accounts_env) {
                if !vars.contains(&var.as_str()) {
                    vars.push(var);
                }
            }
        }
        vars
    }
}

/// Compiler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerSection {
    #[serde(default = "default_compiler_version")]
    pub version: String,
}

impl Default for CompilerSection {
    fn default() -> Self {
        Self {
            version: default_compiler_version(),
        }
    }
}

/// Network declaration. Values are read from the named variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkSection {
    #[serde(default = "default_url_env")]
    pub url_env: String,

    #[serde(default = "default_accounts_env")]
    pub accounts_env: Vec<String>,
}

impl Default for NetworkSection {
    fn default() -> Self {
        Self {
            url_env: default_url_env(),
            accounts_env: default_accounts_env(),
        }
    }
}

/// Gas reporter configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportingSection {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default = "default_gas_price")]
    pub gas_price: f64,
}

impl Default for ReportingSection {
    fn default() -> Self {
        Self {
            enabled: true,
            currency: default_currency(),
            gas_price: DEFAULT_GAS_PRICE,
        }
    }
}

fn default_networks() -> BTreeMap<String, NetworkSection> {
    BTreeMap::from([(DEFAULT_NETWORK.to_string(), NetworkSection::default())])
}

fn default_compiler_version() -> String {
    DEFAULT_COMPILER_VERSION.to_string()
}

fn default_url_env() -> String {
    DEFAULT_URL_ENV.to_string()
}

fn default_accounts_env() -> Vec<String> {
    vec![DEFAULT_ACCOUNTS_ENV.to_string()]
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_gas_price() -> f64 {
    DEFAULT_GAS_PRICE
}
