//! FILENAME: app/src/config.rs
// PURPOSE: Application configuration (JSON file plus environment overrides).

use std::path::{Path, PathBuf};

use query_engine::{TableConfig, DEFAULT_PAGE_SIZE};
use records::Employee;
use serde::{Deserialize, Serialize};
use stats_engine::ReportOptions;
use thiserror::Error;

pub const ENV_DATA_DIR: &str = "WORKFORCE_DATA_DIR";
pub const ENV_PAGE_SIZE: &str = "WORKFORCE_PAGE_SIZE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Directory holding `employees.json` and `attendance.json`.
    pub data_dir: PathBuf,
    pub page_size: usize,
    /// Unified log file; `None` logs to the `log` facade only.
    pub log_file: Option<PathBuf>,
    pub top_departments: usize,
    pub department_preview: usize,
    /// JSON array of employees used when no roster has been stored yet.
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: PathBuf::from("data"),
            page_size: DEFAULT_PAGE_SIZE,
            log_file: None,
            top_departments: 5,
            department_preview: 5,
            seed_file: None,
        }
    }
}

impl AppConfig {
    /// Reads `path` and applies environment overrides. A missing file
    /// yields the defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let base = match std::fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
            Err(e) => return Err(e.into()),
        };
        base.apply_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(text)?;
        config.validate()
    }

    /// Overrides from `lookup` (normally the process environment). Blank
    /// values are ignored.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            let trimmed = dir.trim();
            if !trimmed.is_empty() {
                self.data_dir = PathBuf::from(trimmed);
            }
        }
        if let Some(size) = lookup(ENV_PAGE_SIZE) {
            let trimmed = size.trim();
            if !trimmed.is_empty() {
                self.page_size = trimmed.parse().map_err(|_| ConfigError::InvalidValue {
                    key: ENV_PAGE_SIZE.to_string(),
                    value: size.clone(),
                })?;
            }
        }
        self.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "pageSize".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(self)
    }

    pub fn table_config(&self) -> TableConfig {
        TableConfig::new(self.page_size)
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            top_departments: self.top_departments,
        }
    }

    /// Seed roster from `seed_file`; empty when none is configured.
    pub fn load_seed_employees(&self) -> Result<Vec<Employee>, ConfigError> {
        match &self.seed_file {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&text)?)
            }
            None => Ok(Vec::new()),
        }
    }
}
