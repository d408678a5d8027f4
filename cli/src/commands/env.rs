//! Environment variable report.

use {
    crate::{
        config::{self, Environment, ProcessEnv},
        output, Result,
    },
    std::path::Path,
};

/// Lists every variable the project file references and whether it is set.
/// Values are never printed.
///
/// # Errors
/// Returns an error if the project file cannot be read.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let file = config::load_file(config_path)?;
    let env = ProcessEnv::with_dotenv();

    output::header("Environment");
    let mut missing = 0;
    for var in file.referenced_vars() {
        let set = env.var(var).is_some();
        if !set {
            missing += 1;
        }
        output::var_status(var, set);
    }

    if missing > 0 {
        output::warning(&format!("{missing} variable(s) not set"));
    }

    Ok(())
}
