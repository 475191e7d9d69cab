//! # tally
//!
//! Prints a tax-inclusive receipt for a basket file.
//!
//! ## Usage
//! ```bash
//! tally basket.txt
//! tally --format json basket.txt
//! cat basket.txt | tally -
//! RUST_LOG=tally=debug tally basket.txt
//! ```
//!
//! Exit code 0 on success, 1 on any read, config or parse failure. The
//! reason goes to stderr; stdout only ever carries the receipt.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tally_core::ReceiptFormat;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tally_cli::config::TallyConfig;
use tally_cli::{generate_receipt, read_lines};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Prints a tax-inclusive receipt for a basket of items")]
#[command(version)]
struct Cli {
    /// Basket file, one "<quantity> <name> at <price>" per line ("-" for stdin)
    input: PathBuf,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Receipt format (overrides config and environment)
    #[arg(short, long, value_parser = parse_format)]
    format: Option<ReceiptFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_format(s: &str) -> Result<ReceiptFormat, String> {
    s.parse()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(receipt) => {
            println!("{}", receipt);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let mut config = TallyConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    debug!(?config, "Configuration loaded");

    let lines = read_lines(&cli.input)?;
    debug!(lines = lines.len(), input = %cli.input.display(), "Basket read");

    Ok(generate_receipt(&lines, &config)?)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally_core=trace` - Show per-item tax breakdown
/// - Default: warnings only, raised by `-v` / `-vv`
///
/// Logs are written to stderr.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "warn,tally=debug,tally_cli=debug,tally_core=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
