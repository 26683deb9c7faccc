use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::engine::Engine;
use crate::expr::Limits;
use crate::vars::SystemVariables;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Overrides for built-in system variables.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct SystemConfig {
    /// Pin `DATE` to a fixed value (`YYYY-MM-DD`) instead of today.
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// File the configuration was read from, if any.
    pub source: Option<PathBuf>,
    pub limits: Limits,
    /// Fixed value for `DATE`, if configured.
    pub pinned_date: Option<NaiveDate>,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Build an engine from this configuration.
    ///
    /// `date_override` takes precedence over the configured pinned date.
    #[must_use]
    pub fn engine(&self, date_override: Option<NaiveDate>) -> Engine {
        let mut system = SystemVariables::default();
        if let Some(date) = date_override.or(self.pinned_date) {
            system = system.with_fixed_date(SystemVariables::DATE, date);
        }
        Engine::new(self.limits).with_system_variables(system)
    }
}
