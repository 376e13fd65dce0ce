//! User settings for the obra dashboard
//!
//! Display preferences (currency, separators, date format) and the refresh
//! interval used by `obra dashboard --watch`.

use serde::{Deserialize, Serialize};

use super::paths::ObraPaths;
use crate::display::format::MoneyFormat;
use crate::error::DashboardError;

/// User settings, persisted as `config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol placed before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Digit group separator
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,

    /// Separator between units and cents
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Seconds between snapshot reloads in watch mode
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Whether to colour balances and status labels
    #[serde(default = "default_color_output")]
    pub color_output: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "R$".to_string()
}

fn default_thousands_separator() -> String {
    ".".to_string()
}

fn default_decimal_separator() -> String {
    ",".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_refresh_interval() -> u64 {
    300
}

fn default_color_output() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
            date_format: default_date_format(),
            refresh_interval_secs: default_refresh_interval(),
            color_output: default_color_output(),
        }
    }
}

impl Settings {
    /// Money formatting derived from these settings
    pub fn money_format(&self) -> MoneyFormat {
        MoneyFormat {
            symbol: self.currency_symbol.clone(),
            thousands_separator: self.thousands_separator.clone(),
            decimal_separator: self.decimal_separator.clone(),
        }
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ObraPaths) -> Result<Self, DashboardError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                DashboardError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DashboardError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ObraPaths) -> Result<(), DashboardError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            DashboardError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    fn validate(&self) -> Result<(), DashboardError> {
        if self.refresh_interval_secs == 0 {
            return Err(DashboardError::Config(
                "refresh_interval_secs must be greater than zero".into(),
            ));
        }
        if self.thousands_separator == self.decimal_separator {
            return Err(DashboardError::Config(
                "thousands and decimal separators must differ".into(),
            ));
        }
        Ok(())
    }
}
