//! Location of the configuration directory.
//!
//! XDG conventions are preferred over OS-specific locations so the config
//! lives in the same place on Linux and macOS.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "gt";

/// Returns the configuration directory for gt.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/gt` if `XDG_CONFIG_HOME` is set and non-empty
/// 2. `~/.config/gt` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join(APP_DIR))
}
