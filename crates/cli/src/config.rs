//! Runtime configuration resolved from the environment.

use std::path::PathBuf;

use stockbook_inventory::{DEFAULT_INVENTORY_FILE, DEFAULT_LOW_STOCK_THRESHOLD};

pub const FILE_ENV: &str = "STOCKBOOK_FILE";
pub const THRESHOLD_ENV: &str = "STOCKBOOK_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub file: PathBuf,
    pub low_stock_threshold: i64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(file) = lookup(FILE_ENV).filter(|f| !f.trim().is_empty()) {
            config.file = PathBuf::from(file);
        }

        if let Some(raw) = lookup(THRESHOLD_ENV) {
            match raw.trim().parse::<i64>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(_) => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_LOW_STOCK_THRESHOLD,
                    "{THRESHOLD_ENV} is not an integer; using default"
                ),
            }
        }

        config
    }

    /// Command-line `--file` takes precedence over the environment.
    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.file = file;
        }
        self
    }
}
