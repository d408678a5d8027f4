//! The resolved, read-only project configuration.
//!
//! A [`ConfigurationDescriptor`] is built once, either by resolving a
//! [`ProjectFile`] against an [`Environment`] or explicitly through
//! [`DescriptorBuilder`], and is never mutated afterwards.

use {
    crate::{
        config::{env::Environment, types::ProjectFile},
        credential::{SigningCredential, REDACTED},
        Error, Result,
    },
    serde::Serialize,
    std::{collections::BTreeMap, fmt},
    url::Url,
};

const URL_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];

/// Contract-language compiler selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerSetting {
    version: String,
}

impl CompilerSetting {
    /// # Errors
    /// Returns a configuration error unless `version` is `MAJOR.MINOR.PATCH`.
    pub fn new(version: &str) -> Result<Self> {
        let version = version.trim();
        let parts: Vec<&str> = version.split('.').collect();
        let numeric = parts.len() == 3
            && parts
                .iter()
                .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));

        if !numeric {
            return Err(Error::config(
                "compiler.version",
                format!("expected MAJOR.MINOR.PATCH, got '{version}'"),
            ));
        }

        Ok(Self {
            version: version.to_string(),
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Connectivity and signing credentials for one deployment target.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct NetworkProfile {
    #[serde(rename = "endpointURL")]
    endpoint_url: String,
    credentials: Vec<SigningCredential>,
}

impl NetworkProfile {
    /// # Errors
    /// Returns a configuration error if the URL is not an absolute
    /// http(s)/ws(s) URL or no credential is given.
    pub fn new(
        name: &str,
        endpoint_url: impl Into<String>,
        credentials: Vec<SigningCredential>,
    ) -> Result<Self> {
        let endpoint_url = endpoint_url.into();
        validate_endpoint(&format!("networks.{name}.url"), &endpoint_url)?;

        if credentials.is_empty() {
            return Err(Error::config(
                format!("networks.{name}.accounts"),
                "at least one signing credential is required",
            ));
        }

        Ok(Self {
            endpoint_url,
            credentials,
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn credentials(&self) -> &[SigningCredential] {
        &self.credentials
    }
}

impl fmt::Debug for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkProfile")
            .field("endpoint_url", &mask_url_password(&self.endpoint_url))
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Gas report display settings. Never used to build transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingSetting {
    currency_label: String,
    unit_price: f64,
    enabled: bool,
}

impl ReportingSetting {
    /// # Errors
    /// Returns a configuration error if the label is blank or the price is
    /// negative or not finite.
    pub fn new(currency_label: &str, unit_price: f64) -> Result<Self> {
        let currency_label = currency_label.trim();
        if currency_label.is_empty() {
            return Err(Error::config(
                "reporting.currency",
                "currency label cannot be empty",
            ));
        }

        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(Error::config(
                "reporting.gas_price",
                format!("gas price must be a non-negative number, got {unit_price}"),
            ));
        }

        Ok(Self {
            currency_label: currency_label.to_string(),
            unit_price,
            enabled: true,
        })
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn currency_label(&self) -> &str {
        &self.currency_label
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

/// Compiler choice, network profiles and reporting preferences for one
/// project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationDescriptor {
    compiler: CompilerSetting,
    networks: BTreeMap<String, NetworkProfile>,
    reporting: ReportingSetting,
}

impl ConfigurationDescriptor {
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::default()
    }

    /// Resolves a project file against an environment.
    ///
    /// Every declared network is resolved up front, so a missing or
    /// malformed variable fails here rather than when the network is used.
    ///
    /// # Errors
    /// Returns a configuration error naming the first invalid field.
    pub fn load(file: &ProjectFile, env: &impl Environment) -> Result<Self> {
        let reporting = ReportingSetting::new(&file.reporting.currency, file.reporting.gas_price)?
            .with_enabled(file.reporting.enabled);

        let mut builder = Self::builder()
            .compiler(&file.compiler.version)
            .reporting(reporting);

        for (name, section) in &file.networks {
            let url = env.var(&section.url_env).ok_or_else(|| {
                Error::config(
                    format!("networks.{name}.url ({})", section.url_env),
                    "environment variable is not set",
                )
            })?;

            let credentials = section
                .accounts_env
                .iter()
                .enumerate()
                .map(|(i, var)| {
                    let field = format!("networks.{name}.accounts[{i}] ({var})");
                    let raw = env
                        .var(var)
                        .ok_or_else(|| Error::config(&field, "environment variable is not set"))?;
                    SigningCredential::from_raw(&field, &raw)
                })
                .collect::<Result<Vec<_>>>()?;

            tracing::debug!(
                network = %name,
                url_env = %section.url_env,
                accounts = credentials.len(),
                "resolved network profile"
            );

            builder = builder.network(name, url, credentials);
        }

        let descriptor = builder.build()?;
        tracing::info!(
            compiler = %descriptor.compiler_version(),
            networks = descriptor.networks.len(),
            "configuration loaded"
        );
        Ok(descriptor)
    }

    /// Looks up a declared network.
    ///
    /// # Errors
    /// Returns [`Error::UnknownNetwork`] if `name` is not declared.
    pub fn network_profile(&self, name: &str) -> Result<&NetworkProfile> {
        self.networks
            .get(name)
            .ok_or_else(|| Error::unknown_network(name, self.network_names()))
    }

    pub fn compiler_version(&self) -> &str {
        self.compiler.version()
    }

    pub fn reporting_settings(&self) -> &ReportingSetting {
        &self.reporting
    }

    /// Declared network names in sorted order.
    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Renders the descriptor with real credentials for the deployment
    /// toolchain. Never print this.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_toolchain_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns a displayable view with credentials masked.
    pub fn redacted(&self) -> serde_json::Value {
        let networks: serde_json::Map<String, serde_json::Value> = self
            .networks
            .iter()
            .map(|(name, profile)| (name.clone(), redact_profile(profile)))
            .collect();

        serde_json::json!({
            "compiler": { "version": self.compiler.version() },
            "networks": networks,
            "reporting": {
                "currencyLabel": self.reporting.currency_label(),
                "unitPrice": self.reporting.unit_price(),
                "enabled": self.reporting.enabled(),
            },
        })
    }
}

/// Masked rendering of a single profile. URL passwords are masked as well.
pub fn redact_profile(profile: &NetworkProfile) -> serde_json::Value {
    let credentials: Vec<&str> = profile.credentials.iter().map(|_| REDACTED).collect();
    serde_json::json!({
        "endpointURL": mask_url_password(&profile.endpoint_url),
        "credentials": credentials,
    })
}

fn mask_url_password(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) if url.password().is_some() => {
            let _ = url.set_password(Some("********"));
            url.to_string()
        }
        _ => raw.to_string(),
    }
}

/// Validates an endpoint without echoing it; provider URLs often embed keys.
fn validate_endpoint(field: &str, raw: &str) -> Result<()> {
    if raw.trim() != raw {
        return Err(Error::config(
            field,
            "endpoint URL has leading or trailing whitespace",
        ));
    }

    let url = Url::parse(raw)
        .map_err(|e| Error::config(field, format!("endpoint is not a valid URL ({e})")))?;

    if !URL_SCHEMES.contains(&url.scheme()) {
        return Err(Error::config(
            field,
            format!(
                "unsupported URL scheme '{}', expected one of {}",
                url.scheme(),
                URL_SCHEMES.join(", ")
            ),
        ));
    }

    if url.host().is_none() {
        return Err(Error::config(field, "endpoint URL has no host"));
    }

    Ok(())
}

/// Explicit composition of a descriptor.
#[derive(Debug, Default)]
pub struct DescriptorBuilder {
    compiler: Option<String>,
    networks: Vec<(String, String, Vec<SigningCredential>)>,
    reporting: Option<ReportingSetting>,
}

impl DescriptorBuilder {
    #[must_use]
    pub fn compiler(mut self, version: &str) -> Self {
        self.compiler = Some(version.to_string());
        self
    }

    #[must_use]
    pub fn network(
        mut self,
        name: &str,
        endpoint_url: impl Into<String>,
        credentials: Vec<SigningCredential>,
    ) -> Self {
        self.networks
            .push((name.to_string(), endpoint_url.into(), credentials));
        self
    }

    #[must_use]
    pub fn reporting(mut self, reporting: ReportingSetting) -> Self {
        self.reporting = Some(reporting);
        self
    }

    /// Validates and freezes the descriptor. Unset compiler and reporting
    /// settings fall back to the project file defaults.
    ///
    /// # Errors
    /// Returns a configuration error for invalid settings or a network name
    /// declared twice.
    pub fn build(self) -> Result<ConfigurationDescriptor> {
        let defaults = ProjectFile::default();

        let compiler = CompilerSetting::new(
            self.compiler
                .as_deref()
                .unwrap_or(&defaults.compiler.version),
        )?;

        let reporting = match self.reporting {
            Some(reporting) => reporting,
            None => ReportingSetting::new(
                &defaults.reporting.currency,
                defaults.reporting.gas_price,
            )?,
        };

        let mut networks = BTreeMap::new();
        for (name, endpoint_url, credentials) in self.networks {
            if name.trim().is_empty() {
                return Err(Error::config("networks", "network name cannot be empty"));
            }
            if networks.contains_key(&name) {
                return Err(Error::config(
                    format!("networks.{name}"),
                    "network declared more than once",
                ));
            }
            let profile = NetworkProfile::new(&name, endpoint_url, credentials)?;
            networks.insert(name, profile);
        }

        Ok(ConfigurationDescriptor {
            compiler,
            networks,
            reporting,
        })
    }
}
