//! Configuration from environment variables, overridden by CLI flags.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// tracing filter directive, e.g. `warn` or `paybox_core=debug`
    pub log_level: String,
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Load config from `PAYBOX_LOG` and `PAYBOX_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_vars(env::var("PAYBOX_LOG").ok(), env::var("PAYBOX_FORMAT").ok())
    }

    fn from_vars(log_level: Option<String>, format: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: log_level
                .filter(|level| !level.trim().is_empty())
                .unwrap_or(defaults.log_level),
            format: format
                .and_then(|value| <OutputFormat as ValueEnum>::from_str(value.trim(), true).ok())
                .unwrap_or(defaults.format),
        }
    }

    /// Apply flags given on the command line.
    pub fn with_overrides(mut self, log_level: Option<&str>, format: Option<OutputFormat>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level.to_string();
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
