//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

/// Process exit codes for failed commands.
pub mod exit;

pub use args::{Args, Command};
