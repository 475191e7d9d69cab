//! # CLI Configuration
//!
//! Tax policy and output settings for the receipt printer.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --format json                                                      │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TALLY_BASIC_RATE=10                                                │
//! │     TALLY_IMPORT_DUTY_RATE=5                                           │
//! │     TALLY_ROUNDING_UNIT=5                                              │
//! │     TALLY_OUTPUT_FORMAT=text                                           │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or                                                  │
//! │     ~/.config/tally/tally.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.tally.tally/tally.toml (macOS)   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     10% basic, 5% import, round up to 5 cents, text output             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [tax]
//! basic_rate_percent = 10
//! import_duty_percent = 5
//! rounding_unit_cents = 5
//! exempt_keywords = ["book", "chocolate", "chocolates", "pills", "food", "medicine"]
//! import_marker = "imported"
//!
//! [output]
//! format = "text"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tally_core::{ReceiptFormat, TaxPolicy};
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

pub const ENV_BASIC_RATE: &str = "TALLY_BASIC_RATE";
pub const ENV_IMPORT_DUTY_RATE: &str = "TALLY_IMPORT_DUTY_RATE";
pub const ENV_ROUNDING_UNIT: &str = "TALLY_ROUNDING_UNIT";
pub const ENV_OUTPUT_FORMAT: &str = "TALLY_OUTPUT_FORMAT";

// =============================================================================
// Output Settings
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Receipt format written to stdout.
    #[serde(default)]
    pub format: ReceiptFormat,
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Rates, rounding and classification vocabulary.
    #[serde(default)]
    pub tax: TaxPolicy,

    #[serde(default)]
    pub output: OutputSettings,
}

impl TallyConfig {
    /// Loads configuration from file, process environment, and defaults.
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        Self::load_with_env(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`TallyConfig::load`] with an injectable environment lookup.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// An explicit `config_path` must exist; the platform default may not.
    pub fn load_with_env<F>(config_path: Option<&Path>, env: F) -> CliResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_path {
            Some(path) if !path.exists() => {
                return Err(CliError::ConfigNotFound(path.to_path_buf()));
            }
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides(env);
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file. Missing sections fall back to defaults.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::ConfigLoadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Checks the merged configuration.
    pub fn validate(&self) -> CliResult<()> {
        Ok(self.tax.validate()?)
    }

    /// Applies environment variable overrides. Unparsable values are
    /// logged and ignored.
    fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = env(ENV_BASIC_RATE) {
            match value.trim().parse::<u32>() {
                Ok(pct) => {
                    debug!(pct, "Overriding basic rate from environment");
                    self.tax.basic_rate_percent = pct;
                }
                Err(_) => warn!(value = %value, "Ignoring invalid {}", ENV_BASIC_RATE),
            }
        }

        if let Some(value) = env(ENV_IMPORT_DUTY_RATE) {
            match value.trim().parse::<u32>() {
                Ok(pct) => {
                    debug!(pct, "Overriding import duty from environment");
                    self.tax.import_duty_percent = pct;
                }
                Err(_) => warn!(value = %value, "Ignoring invalid {}", ENV_IMPORT_DUTY_RATE),
            }
        }

        if let Some(value) = env(ENV_ROUNDING_UNIT) {
            match value.trim().parse::<i64>() {
                Ok(cents) => {
                    debug!(cents, "Overriding rounding unit from environment");
                    self.tax.rounding_unit_cents = cents;
                }
                Err(_) => warn!(value = %value, "Ignoring invalid {}", ENV_ROUNDING_UNIT),
            }
        }

        if let Some(value) = env(ENV_OUTPUT_FORMAT) {
            match value.parse::<ReceiptFormat>() {
                Ok(format) => self.output.format = format,
                Err(e) => warn!(error = %e, "Ignoring invalid {}", ENV_OUTPUT_FORMAT),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tally", "tally")
            .map(|dirs| dirs.config_dir().join("tally.toml"))
    }
}
