//! Configuration management for Booklend

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::models::{NewBook, NewUser};

/// Lending policy
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct LoansConfig {
    /// Loan length in days
    pub duration_days: u32,
    /// Fine units charged per day late
    pub fine_per_day: i64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "pretty" or "json"
    pub format: String,
}

/// Records preloaded into the catalog and directory
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SeedConfig {
    pub books: Vec<NewBook>,
    pub users: Vec<NewUser>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub loans: LoansConfig,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // e.g. BOOKLEND_LOANS__DURATION_DAYS=21
            .add_source(
                Environment::with_prefix("BOOKLEND")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// Deserialize and validate an already layered configuration
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let app: AppConfig = config.try_deserialize()?;
        app.loans.validate()?;
        Ok(app)
    }
}

/// Longest accepted loan, ten years
const MAX_LOAN_DAYS: u32 = 3650;

impl LoansConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_days == 0 || self.duration_days > MAX_LOAN_DAYS {
            return Err(ConfigError::Message(format!(
                "loans.duration_days must be between 1 and {}, got {}",
                MAX_LOAN_DAYS, self.duration_days
            )));
        }
        if self.fine_per_day < 0 {
            return Err(ConfigError::Message(format!(
                "loans.fine_per_day must not be negative, got {}",
                self.fine_per_day
            )));
        }
        Ok(())
    }
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self {
            duration_days: 14,
            fine_per_day: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
