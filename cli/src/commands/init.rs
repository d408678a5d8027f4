//! Project configuration scaffolding command.

use {
    crate::{
        config::types::ProjectFile,
        constants::{CHAINCONF_TOML, ENV_EXAMPLE},
        output, templates, Error, Result,
    },
    std::path::Path,
};

/// Writes `Chainconf.toml` and `.env.example` into the current directory.
///
/// # Errors
/// Returns an error if `Chainconf.toml` already exists or file creation fails.
pub fn run() -> Result<()> {
    run_in(Path::new("."))
}

/// Writes the scaffold into `dir`.
///
/// # Errors
/// Returns an error if the project file already exists or file creation fails.
pub fn run_in(dir: &Path) -> Result<()> {
    let config_path = dir.join(CHAINCONF_TOML);
    if config_path.exists() {
        return Err(Error::ConfigExists(CHAINCONF_TOML.to_string()));
    }

    let defaults = ProjectFile::default();
    templates::create_file(
        &config_path,
        &templates::render(templates::CHAINCONF_TOML_TEMPLATE, &defaults),
    )?;
    output::success(&format!("Created {CHAINCONF_TOML}"));

    // An existing example is kept; it may have been edited by hand.
    let env_path = dir.join(ENV_EXAMPLE);
    if env_path.exists() {
        output::warning(&format!("{ENV_EXAMPLE} already exists, leaving it untouched"));
    } else {
        templates::create_file(
            &env_path,
            &templates::render(templates::ENV_EXAMPLE_TEMPLATE, &defaults),
        )?;
        output::success(&format!("Created {ENV_EXAMPLE}"));
    }

    println!("\nNext steps:");
    println!("  cp {ENV_EXAMPLE} .env");
    println!("  chainconf check\n");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        run_in(dir.path()).unwrap();

        let written = std::fs::read_to_string(dir.path().join(CHAINCONF_TOML)).unwrap();
        assert_eq!(crate::config::parse(&written).unwrap(), ProjectFile::default());
        assert!(dir.path().join(ENV_EXAMPLE).exists());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CHAINCONF_TOML), "# mine\n").unwrap();

        let err = run_in(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigExists(_)));
        let kept = std::fs::read_to_string(dir.path().join(CHAINCONF_TOML)).unwrap();
        assert_eq!(kept, "# mine\n");
    }
}
