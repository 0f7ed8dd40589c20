use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Largest input accepted, in bytes.
pub const MAX_INPUT_SIZE: usize = 1024 * 1024;

/// Text read from a file or stdin, minus one trailing line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub text: String,
    /// The line break removed from the end: `""`, `"\n"` or `"\r\n"`.
    pub line_ending: &'static str,
}

/// Reads the text to translate from a file or stdin.
pub struct InputReader;

impl InputReader {
    /// Reads `file_path`, or stdin when it is `None`.
    ///
    /// A single trailing line break is removed, so `echo hello | gt` sends
    /// `hello`. It is kept in [`Input::line_ending`] for writing back.
    pub fn read(file_path: Option<&Path>) -> Result<Input> {
        let text = match file_path {
            Some(path) => Self::read_file(path)?,
            None => Self::read_from(io::stdin().lock()).context("Failed to read from stdin")?,
        };
        Ok(split_trailing_newline(text))
    }

    fn read_file(path: &Path) -> Result<String> {
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;
        Self::read_from(file).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Reads at most [`MAX_INPUT_SIZE`] bytes of UTF-8 from `source`.
    pub fn read_from(source: impl Read) -> Result<String> {
        let mut buffer = Vec::new();
        // One extra byte tells an exactly-full input from an oversized one.
        source
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)?;

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(
                "Input exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting it into smaller parts."
            );
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn split_trailing_newline(mut text: String) -> Input {
    let line_ending = if text.ends_with("\r\n") {
        "\r\n"
    } else if text.ends_with('\n') {
        "\n"
    } else {
        ""
    };
    text.truncate(text.len() - line_ending.len());
    Input { text, line_ending }
}
