use anyhow::Result;
use clap::Parser;

use gt_cli::cli::commands::{configure, languages, translate};
use gt_cli::cli::exit::exit_code;
use gt_cli::cli::{Args, Command};
use gt_cli::output::{self, OutputConfig};
use gt_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages { rtl }) => {
            languages::print_languages(rtl);
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let options = translate::TranslateOptions {
                file: args.file,
                from: args.from,
                to: args.to,
                endpoint: args.endpoint,
                dictionary: args.dictionary,
                json: args.json,
                write: args.write,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
