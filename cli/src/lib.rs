//! Chainconf library interface.
//!
//! Resolves a smart-contract project's compiler version, network profiles and
//! gas report settings into a read-only [`ConfigurationDescriptor`]. It can be
//! used programmatically or through the `chainconf` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod credential;
pub mod descriptor;
pub mod error;
pub mod logging;
pub mod output;
pub mod templates;

mod constants;

pub use {
    cli::run,
    config::{Environment, MapEnv, ProcessEnv, ProjectFile},
    credential::SigningCredential,
    descriptor::{
        CompilerSetting, ConfigurationDescriptor, DescriptorBuilder, NetworkProfile,
        ReportingSetting,
    },
    error::{Error, Result},
};
