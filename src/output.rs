//! Process-wide output settings for the CLI.
//!
//! Translations are written to stdout so they can be piped. Status lines,
//! warnings and errors go to stderr. Quiet mode drops status lines but
//! never warnings or errors.

use std::sync::OnceLock;

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress status output and the spinner.
    pub quiet: bool,
    /// Print without ANSI colors.
    pub no_color: bool,
}

impl OutputConfig {
    /// Builds the settings from CLI flags.
    ///
    /// Colors are also disabled when `NO_COLOR` is set (https://no-color.org/).
    pub fn from_flags(quiet: bool, no_color: bool) -> Self {
        Self {
            quiet,
            no_color: no_color || std::env::var_os("NO_COLOR").is_some(),
        }
    }
}

/// Installs the settings. Only the first call has an effect.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(|| OutputConfig::from_flags(false, false))
}

pub fn is_quiet() -> bool {
    config().quiet
}

pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a status line to stderr unless quiet mode is on.
#[macro_export]
macro_rules! status {
    ($($arg:tt)*) => {
        if !$crate::output::is_quiet() {
            eprintln!($($arg)*);
        }
    };
}

/// Print a warning to stderr, even in quiet mode.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!("{} {}", $crate::ui::Style::warning("Warning:"), format_args!($($arg)*));
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_flags_respects_no_color_env() {
        let original = std::env::var_os("NO_COLOR");

        unsafe { std::env::remove_var("NO_COLOR") };
        assert_eq!(
            OutputConfig::from_flags(true, false),
            OutputConfig {
                quiet: true,
                no_color: false
            }
        );
        assert!(OutputConfig::from_flags(false, true).no_color);

        unsafe { std::env::set_var("NO_COLOR", "1") };
        assert!(OutputConfig::from_flags(false, false).no_color);

        // Restore
        match original {
            Some(val) => unsafe { std::env::set_var("NO_COLOR", val) },
            None => unsafe { std::env::remove_var("NO_COLOR") },
        }
    }

    #[test]
    fn test_default_is_not_quiet() {
        assert!(!OutputConfig::default().quiet);
    }
}
