use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gt")]
#[command(about = "Translate text with Google Translate, with dictionary lookups")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Source language code or English name (e.g., en, English)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code or English name (e.g., es, Spanish)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Translation endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Also print alternate translations per source term
    #[arg(short = 'd', long)]
    pub dictionary: bool,

    /// Print the full result as JSON
    #[arg(long, conflicts_with = "write")]
    pub json: bool,

    /// Overwrite FILE with the translation
    #[arg(short = 'w', long, requires = "file")]
    pub write: bool,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported languages
    Languages {
        /// Only list right-to-left languages
        #[arg(long)]
        rtl: bool,
    },
    /// Configure default languages
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translate_args() {
        let args = Args::try_parse_from(["gt", "-f", "en", "-t", "Spanish", "-d", "notes.txt"]).unwrap();

        assert_eq!(args.from.as_deref(), Some("en"));
        assert_eq!(args.to.as_deref(), Some("Spanish"));
        assert!(args.dictionary);
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_write_requires_file() {
        assert!(Args::try_parse_from(["gt", "--write"]).is_err());
    }

    #[test]
    fn test_json_conflicts_with_write() {
        assert!(Args::try_parse_from(["gt", "--json", "--write", "notes.txt"]).is_err());
    }

    #[test]
    fn test_parse_languages_subcommand() {
        let args = Args::try_parse_from(["gt", "languages", "--rtl"]).unwrap();
        assert!(matches!(args.command, Some(Command::Languages { rtl: true })));
    }
}
