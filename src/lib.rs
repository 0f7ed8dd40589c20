//! # gt - Google Translate client and CLI
//!
//! `gt` sends text to the Google Translate gateway and turns the JSON it
//! returns into a [`Translation`](translation::Translation): the primary
//! translation plus, when the endpoint provides one, a dictionary of
//! alternate translations per source term.
//!
//! ## Library
//!
//! ```no_run
//! use gt_cli::translation::TranslationClient;
//!
//! # async fn run() -> gt_cli::translation::Result<()> {
//! let mut client = TranslationClient::new();
//! client.set_source_language("en")?.set_target_language("Spanish")?;
//!
//! let result = client.translate("hello").await?;
//! println!("{}", result.translation);
//! for (term, alternates) in &result.dictionary {
//!     println!("{term}: {}", alternates.join(", "));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## CLI
//!
//! ```bash
//! # Translate a file
//! gt --from en --to es ./notes.txt
//!
//! # Translate from stdin, with alternate translations
//! echo hello | gt -f English -t Spanish --dictionary
//!
//! # List supported languages
//! gt languages
//! ```
//!
//! ## Configuration
//!
//! Defaults are stored in `~/.config/gt/config.toml`:
//!
//! ```toml
//! [gt]
//! from = "en"
//! to = "es"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation client, language catalog and response parsing.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
