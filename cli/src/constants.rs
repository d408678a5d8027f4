//! Application-wide constants.

pub const CHAINCONF_TOML: &str = "Chainconf.toml";
pub const ENV_EXAMPLE: &str = ".env.example";
pub const LOG_ENV: &str = "RUST_LOG";
