use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;
use crate::translation::{DEFAULT_ENDPOINT, Language, TranslateError};

/// Default settings in the `[gt]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GtConfig {
    /// Default source language (code or English name).
    pub from: Option<String>,
    /// Default target language (code or English name).
    pub to: Option<String>,
    /// Translation gateway URL. The public Google gateway when unset.
    pub endpoint: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/gt/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gt: GtConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
}

/// Configuration after merging CLI arguments and the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub source_language: Language,
    pub target_language: Language,
    pub endpoint: String,
}

/// Merges CLI options with config file settings. CLI options win.
///
/// # Errors
///
/// Returns an error if a language is missing or unrecognized.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let source_language = resolve_language(
        options.from.as_deref().or(config_file.gt.from.as_deref()),
        "from",
        "source language",
        TranslateError::SourceLanguageNotSet,
    )?;

    let target_language = resolve_language(
        options.to.as_deref().or(config_file.gt.to.as_deref()),
        "to",
        "target language",
        TranslateError::TargetLanguageNotSet,
    )?;

    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.gt.endpoint.as_ref())
        .map_or_else(|| DEFAULT_ENDPOINT.to_string(), Clone::clone);

    Ok(ResolvedConfig {
        source_language,
        target_language,
        endpoint,
    })
}

fn resolve_language(
    identifier: Option<&str>,
    key: &str,
    what: &str,
    missing: TranslateError,
) -> Result<Language> {
    let Some(identifier) = identifier else {
        return Err(missing).with_context(|| {
            format!(
                "Missing required configuration: '{key}' ({what}). \
                 Pass --{key} <lang> or run 'gt configure'"
            )
        });
    };

    Language::from_identifier(identifier).with_context(|| {
        format!("Invalid {what}. Run 'gt languages' to see all supported codes and names.")
    })
}

/// Loads and saves the config file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Uses `$XDG_CONFIG_HOME/gt/config.toml`, or `~/.config/gt/config.toml`
    /// when `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(paths::config_dir()?.join("config.toml")))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }
}
