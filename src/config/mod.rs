mod manager;

pub use manager::{
    ConfigFile, ConfigManager, GtConfig, ResolveOptions, ResolvedConfig, resolve_config,
};
