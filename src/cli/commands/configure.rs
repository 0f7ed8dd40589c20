//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::Select;

use crate::config::{ConfigFile, ConfigManager, GtConfig};
use crate::translation::{Language, catalog};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current defaults. Otherwise lets the user pick
/// the default source and target languages interactively.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    if show {
        let config = manager.load_or_default()?;
        print_current_defaults(&config);
        println!(
            "{} {}",
            Style::label("file"),
            Style::secondary(manager.config_path().display())
        );
        return Ok(());
    }

    handle_prompt_cancellation(|| configure_interactively(&manager))
}

fn configure_interactively(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;
    print_current_defaults(&config);

    let from = select_language("Default source language:", config.gt.from.as_deref())?;
    let to = select_language("Default target language:", config.gt.to.as_deref())?;

    config.gt = GtConfig {
        from: Some(from),
        to: Some(to),
        endpoint: config.gt.endpoint.take(),
    };
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");

    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}      {}",
        Style::label("from"),
        config.gt.from.as_deref().map_or_else(not_set, describe_language)
    );
    println!(
        "  {}        {}",
        Style::label("to"),
        config.gt.to.as_deref().map_or_else(not_set, describe_language)
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        config.gt.endpoint.as_deref().map_or_else(not_set, Style::value)
    );
    println!();
}

/// Shows a configured identifier with its resolved name, or flags it as
/// invalid so a hand-edited config is easy to spot.
fn describe_language(identifier: &str) -> String {
    match Language::from_identifier(identifier) {
        Ok(language) => format!(
            "{} {}",
            Style::value(language.code()),
            Style::secondary(language.name())
        ),
        Err(_) => format!(
            "{} {}",
            Style::value(identifier),
            Style::warning("(unrecognized)")
        ),
    }
}

fn select_language(prompt: &str, default: Option<&str>) -> Result<String> {
    // Options are formatted as "code - Name"
    let options: Vec<String> = catalog::languages()
        .map(|(code, name)| format!("{code} - {name}"))
        .collect();

    let default_code = default
        .and_then(|d| Language::from_identifier(d).ok())
        .map(|l| l.code());
    let default_index = default_code
        .and_then(|d| catalog::languages().position(|(code, _)| code == d))
        .unwrap_or(0);

    let selection = Select::new(prompt, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    let code = selection.split(" - ").next().unwrap_or(&selection);
    Ok(code.to_string())
}
