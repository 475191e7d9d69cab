//! # tally-cli
//!
//! Boundary layer around `tally-core`: reads the basket, loads
//! configuration, hands lines to the pure pipeline and returns the text to
//! print.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  file / stdin ──► read_lines ──► generate_receipt ──► stdout            │
//! │                                     │                                   │
//! │                     TallyConfig ────┤ (policy + format)                 │
//! │                                     ▼                                   │
//! │                     tally_core::process_basket + render_as              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;

use std::io::Read;
use std::path::Path;

use tally_core::{process_basket, render_as, CoreError, StandardTaxCalculator};
use tracing::{info, warn};

use crate::config::TallyConfig;
use crate::error::{CliError, CliResult};

/// Path argument meaning "read the basket from stdin".
pub const STDIN_PATH: &str = "-";

/// Reads basket lines from a file, or from stdin when `path` is `-`.
pub fn read_lines(path: &Path) -> CliResult<Vec<String>> {
    let map_err = |source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    };

    let contents = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(map_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(map_err)?
    };

    Ok(split_lines(&contents))
}

/// Splits text into lines, dropping `\r` from CRLF endings.
///
/// A final newline does not produce an extra empty line.
pub fn split_lines(contents: &str) -> Vec<String> {
    contents.lines().map(str::to_string).collect()
}

/// Runs the pipeline and renders the receipt in the configured format.
pub fn generate_receipt<S: AsRef<str>>(lines: &[S], config: &TallyConfig) -> CliResult<String> {
    let calculator = StandardTaxCalculator::new(config.tax.clone())?;

    let receipt = process_basket(lines, &calculator)?;
    if receipt.is_empty() {
        warn!("basket has no items");
    }
    info!(
        items = receipt.entries.len(),
        total_cents = receipt.total_price.cents(),
        "receipt computed"
    );

    render_as(&receipt, config.output.format).map_err(|e| CliError::Core(CoreError::from(e)))
}
