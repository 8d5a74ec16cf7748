use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time_to_minutes;
use chrono::format::{Item, StrftimeItems};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod policy;

pub use policy::Policy;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// IANA timezone used to render punch timestamps.
    pub timezone: String,
    pub date_format: String,
    pub expected_daily: String,
    pub overtime_cap: String,
    pub min_break_minutes: i64,
    pub normalized_break: String,
    pub business_hours_start: String,
    pub business_hours_end: String,
    pub holiday_marker: String,
    pub fetch_chunk_days: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: "America/Sao_Paulo".to_string(),
            date_format: "%d/%m/%Y".to_string(),
            expected_daily: "08:48".to_string(),
            overtime_cap: "01:57".to_string(),
            min_break_minutes: 58,
            normalized_break: "01:00".to_string(),
            business_hours_start: "08:00".to_string(),
            business_hours_end: "17:48".to_string(),
            holiday_marker: "HOLIDAY COMPENSATION".to_string(),
            fetch_chunk_days: 8,
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".punchsheet")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchsheet.yaml")
    }

    /// Load configuration from `path` (or the standard location), falling
    /// back to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// Write the default configuration, creating the parent directory.
    pub fn init(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        fs::write(&path, yaml)?;
        Ok(path)
    }

    /// Validate every field and build the typed reconciliation policy.
    pub fn policy(&self) -> AppResult<Policy> {
        let tz: Tz = self
            .timezone
            .parse()
            .map_err(|_| AppError::Config(format!("unknown timezone '{}'", self.timezone)))?;

        let window_start = parse_time_to_minutes(&self.business_hours_start)?;
        let window_end = parse_time_to_minutes(&self.business_hours_end)?;
        if window_start >= window_end {
            return Err(AppError::Config(format!(
                "business hours start {} must precede end {}",
                self.business_hours_start, self.business_hours_end
            )));
        }

        if self.min_break_minutes < 0 {
            return Err(AppError::Config("min_break_minutes cannot be negative".into()));
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::Config(format!(
                "invalid date_format '{}'",
                self.date_format
            )));
        }

        if self.holiday_marker.trim().is_empty() {
            return Err(AppError::Config("holiday_marker cannot be empty".into()));
        }

        Ok(Policy {
            timezone: tz,
            date_format: self.date_format.clone(),
            expected_minutes: parse_time_to_minutes(&self.expected_daily)?,
            overtime_cap: parse_time_to_minutes(&self.overtime_cap)?,
            min_break: self.min_break_minutes,
            normalized_break: parse_time_to_minutes(&self.normalized_break)?,
            business_hours: (window_start, window_end),
            holiday_marker: self.holiday_marker.clone(),
        })
    }
}
