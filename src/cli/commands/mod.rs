//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Language listing command handler.
pub mod languages;

/// Translation command handler.
pub mod translate;
