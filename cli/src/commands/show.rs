//! Resolved configuration display.

use {
    crate::{config, descriptor::ConfigurationDescriptor, output, Result},
    std::path::Path,
};

/// Prints the resolved configuration. Credentials are always masked.
///
/// # Errors
/// Returns an error if the configuration fails to load.
pub fn run(config_path: Option<&Path>, json: bool) -> Result<()> {
    let descriptor = config::load(config_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptor.redacted())?);
        return Ok(());
    }

    print_text(&descriptor);
    Ok(())
}

fn print_text(descriptor: &ConfigurationDescriptor) {
    output::header("Compiler");
    output::field("version", descriptor.compiler_version());

    let reporting = descriptor.reporting_settings();
    output::header("Gas reporter");
    output::field("enabled", if reporting.enabled() { "yes" } else { "no" });
    output::field("currency", reporting.currency_label());
    output::field("gas price", &reporting.unit_price().to_string());

    output::header("Networks");
    let names: Vec<&str> = descriptor.network_names().collect();
    if names.is_empty() {
        println!("  (none declared)");
    }
    for name in names {
        // Declared names always resolve.
        if let Ok(profile) = descriptor.network_profile(name) {
            crate::commands::network::print_profile(name, profile);
        }
    }
}
