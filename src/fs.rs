//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Replaces the contents of `path` by writing a sibling temp file and
/// renaming it over the target.
///
/// The temp file lives in the target's directory so the rename stays on
/// one filesystem. An interrupted write leaves the original file intact.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Not a file path: {}", path.display()))?;
    let temp_path = parent.join(format!(".{}.gt-tmp", file_name.to_string_lossy()));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e).with_context(|| format!("Failed to replace file: {}", path.display()));
    }

    Ok(())
}
