use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::fs::atomic_write;
use crate::input::InputReader;
use crate::translation::{Dictionary, TranslateError, Translation, TranslationClient};
use crate::ui::{Spinner, Style};
use crate::{status, warn};

pub struct TranslateOptions {
    pub file: Option<PathBuf>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
    pub dictionary: bool,
    pub json: bool,
    pub write: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let input = InputReader::read(options.file.as_deref())?;
    if input.text.is_empty() {
        return Err(TranslateError::EmptyInput.into());
    }

    let config_file = ConfigManager::new()?.load_or_default()?;
    let resolved = resolve_config(
        &ResolveOptions {
            from: options.from.clone(),
            to: options.to.clone(),
            endpoint: options.endpoint.clone(),
        },
        &config_file,
    )?;

    if resolved.source_language == resolved.target_language {
        warn!(
            "Source and target language are both {}",
            resolved.source_language
        );
    }

    let mut client = TranslationClient::new().with_endpoint(&resolved.endpoint)?;
    client
        .set_source_language(resolved.source_language)?
        .set_target_language(resolved.target_language)?;

    let spinner = Spinner::new("Translating...");
    let result = client.translate(&input.text).await;
    spinner.stop();
    let translation = result?;

    if options.write
        && let Some(path) = &options.file
    {
        atomic_write(path, &format!("{}{}", translation.translation, input.line_ending))?;
        status!(
            "{} Wrote {} translation to {}",
            Style::success("✓"),
            resolved.target_language,
            Style::secondary(path.display())
        );
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    if options.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&translation)?)?;
    } else {
        write!(stdout, "{}", format_translation(&translation, options.dictionary))?;
    }
    stdout.flush()?;

    Ok(())
}

/// Renders the translation, followed by the dictionary when requested and
/// non-empty.
pub fn format_translation(translation: &Translation, with_dictionary: bool) -> String {
    let mut out = format!("{}\n", translation.translation);

    if with_dictionary && !translation.dictionary.is_empty() {
        out.push('\n');
        out.push_str(&format_dictionary(&translation.dictionary));
    }

    out
}

fn format_dictionary(dictionary: &Dictionary) -> String {
    dictionary
        .iter()
        .map(|(term, alternates)| {
            format!(
                "{}\n  {}\n",
                Style::term(term),
                Style::value(alternates.join(", "))
            )
        })
        .collect()
}
