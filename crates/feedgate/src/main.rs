//! feedgate - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `feedgate check --input bundle.json` | Evaluate a bundle, exit 1 when any feed rejects it |
//! | `feedgate validators` | Print the catalog of authored-rule validator types |

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use feedgate::{EvaluationBundle, FeedId, OutputFormat, render, run_check, validator_catalog};
use feedgate_infrastructure::config::ConfigLoader;
use feedgate_infrastructure::logging::init_logging;

/// Command line interface for feedgate
#[derive(Parser, Debug)]
#[command(name = "feedgate")]
#[command(about = "Content compliance checks for syndication feeds")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate an article bundle against its feeds
    Check {
        /// Bundle JSON file
        #[arg(short, long)]
        input: PathBuf,

        /// Only evaluate this feed
        #[arg(long)]
        feed: Option<u64>,

        /// Report format
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },
    /// List the validator types authored rules can use
    Validators,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    match cli.command {
        Command::Check {
            input,
            feed,
            format,
        } => {
            let bundle = EvaluationBundle::from_path(&input)
                .with_context(|| format!("Failed to load bundle {}", input.display()))?;
            let report = run_check(&bundle, feed.map(FeedId), &config.evaluation)?;
            println!("{}", render(&report, format));
            Ok(if report.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Validators => {
            let catalog = serde_json::to_string_pretty(&validator_catalog())
                .context("Failed to render validator catalog")?;
            println!("{catalog}");
            Ok(ExitCode::SUCCESS)
        }
    }
}
