//! Subcommand implementations.

pub mod check;
pub mod env;
pub mod init;
pub mod network;
pub mod show;
