//! Template rendering and file creation utilities.

use {
    crate::{config::types::ProjectFile, Error, Result},
    std::{fs, path::Path},
};

pub const CHAINCONF_TOML_TEMPLATE: &str =
    include_str!("../../templates/chainconf.toml.template");
pub const ENV_EXAMPLE_TEMPLATE: &str =
    include_str!("../../templates/env.example.template");

/// Replaces template variables with the values of the first declared
/// network and the file's compiler and reporting settings.
pub fn render(template: &str, file: &ProjectFile) -> String {
    let (network, section) = file
        .networks
        .iter()
        .next()
        .map(|(name, section)| (name.clone(), section.clone()))
        .unwrap_or_default();

    template
        .replace("{{compiler_version}}", &file.compiler.version)
        .replace("{{network}}", &network)
        .replace("{{url_env}}", &section.url_env)
        .replace("{{accounts_env}}", &section.accounts_env.join("\", \""))
        .replace("{{currency}}", &file.reporting.currency)
        .replace("{{gas_price}}", &file.reporting.gas_price.to_string())
        .replace("{{env_vars}}", &env_lines(file))
}

fn env_lines(file: &ProjectFile) -> String {
    file.referenced_vars()
        .iter()
        .map(|var| format!("{var}="))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Creates a file with the given content, creating parent directories if needed.
///
/// # Errors
/// Returns an error if file creation or directory creation fails.
pub fn create_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::Other(anyhow::anyhow!(
                "failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    fs::write(path, content).map_err(|e| {
        Error::Other(anyhow::anyhow!(
            "failed to write file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_project_file_parses_to_defaults() {
        let defaults = ProjectFile::default();
        let rendered = render(CHAINCONF_TOML_TEMPLATE, &defaults);
        assert!(!rendered.contains("{{"));
        assert_eq!(crate::config::parse(&rendered).unwrap(), defaults);
    }

    #[test]
    fn test_env_example_lists_variables() {
        let rendered = render(ENV_EXAMPLE_TEMPLATE, &ProjectFile::default());
        assert!(rendered.contains("ENDPOINT_URL="));
        assert!(rendered.contains("SIGNING_KEY="));
        assert!(!rendered.contains("{{"));
    }
}
