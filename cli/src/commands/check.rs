//! Configuration validation command.

use {
    crate::{config, output, Result},
    std::path::Path,
};

/// Loads the configuration and reports success.
///
/// # Errors
/// Returns the first configuration error encountered.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let descriptor = config::load(config_path)?;

    let networks: Vec<&str> = descriptor.network_names().collect();
    output::success(&format!(
        "Configuration is valid (compiler {}, networks: {})",
        descriptor.compiler_version(),
        if networks.is_empty() {
            "none".to_string()
        } else {
            networks.join(", ")
        }
    ));

    Ok(())
}
