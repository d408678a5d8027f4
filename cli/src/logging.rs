//! Diagnostic logging setup.
//!
//! Events go to stderr so stdout stays clean for `--json` output. Events
//! carry variable and network names only, never values.

use {crate::constants::LOG_ENV, tracing_subscriber::EnvFilter};

const VERBOSE_DIRECTIVE: &str = "chainconf=debug";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Installs the global subscriber. Calling it twice is harmless.
///
/// `RUST_LOG` is read from the process environment, so `.env` must already
/// be loaded for a filter set there to apply.
pub fn init(verbose: bool) {
    let directive = filter_directive(verbose, std::env::var(LOG_ENV).ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `--verbose` wins over `RUST_LOG`, which wins over the default.
fn filter_directive(verbose: bool, from_env: Option<&str>) -> String {
    if verbose {
        return VERBOSE_DIRECTIVE.to_string();
    }
    from_env
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_DIRECTIVE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_env() {
        assert_eq!(filter_directive(true, Some("info")), VERBOSE_DIRECTIVE);
    }

    #[test]
    fn test_env_directive() {
        assert_eq!(filter_directive(false, Some("chainconf=trace")), "chainconf=trace");
        assert_eq!(filter_directive(false, Some("  ")), DEFAULT_DIRECTIVE);
        assert_eq!(filter_directive(false, None), DEFAULT_DIRECTIVE);
    }
}
