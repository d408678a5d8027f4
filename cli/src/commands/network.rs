//! Single network profile lookup.

use {
    crate::{
        config,
        descriptor::{redact_profile, NetworkProfile},
        output, Result,
    },
    std::path::Path,
};

/// Prints the named network profile with credentials masked.
///
/// # Errors
/// Returns an error if the configuration fails to load or the network is
/// not declared.
pub fn run(config_path: Option<&Path>, name: &str, json: bool) -> Result<()> {
    let descriptor = config::load(config_path)?;
    let profile = descriptor.network_profile(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&redact_profile(profile))?);
    } else {
        print_profile(name, profile);
    }

    Ok(())
}

/// Text rendering shared with `show`.
pub fn print_profile(name: &str, profile: &NetworkProfile) {
    let redacted = redact_profile(profile);
    println!("  {name}");
    output::field(
        "url",
        redacted["endpointURL"].as_str().unwrap_or_default(),
    );
    for (i, credential) in profile.credentials().iter().enumerate() {
        output::field(&format!("account {i}"), &credential.to_string());
    }
}
