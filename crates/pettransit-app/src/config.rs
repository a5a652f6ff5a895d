//! Configuration management for pettransit
//!
//! Config stored at: ~/.config/pettransit/config.json

use std::path::{Path, PathBuf};
use std::time::Duration;

use pettransit_domain::service::{FareSchedule, RiderContact};
use pettransit_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Catalog TOML file; the built-in sample data is used when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Fare tariff
    #[serde(default)]
    pub fare: FareSchedule,

    /// Delay before a confirmed rider flow resets, in milliseconds
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,

    /// Rider name copied into requests
    #[serde(default = "default_rider_name")]
    pub rider_name: String,

    /// Rider phone copied into requests
    #[serde(default = "default_rider_phone")]
    pub rider_phone: String,

    /// Rider pickup address
    #[serde(default = "default_rider_pickup")]
    pub rider_pickup: String,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_reset_delay_ms() -> u64 {
    2000
}

fn default_rider_name() -> String {
    "Guest Rider".to_string()
}

fn default_rider_phone() -> String {
    "+52 000 000 0000".to_string()
}

fn default_rider_pickup() -> String {
    "Current location".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            catalog_path: None,
            fare: FareSchedule::default(),
            reset_delay_ms: default_reset_delay_ms(),
            rider_name: default_rider_name(),
            rider_phone: default_rider_phone(),
            rider_pickup: default_rider_pickup(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("pettransit");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or return defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or return defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject tariffs that cannot be applied
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let fare = &self.fare;
        if !fare.base_fare.is_finite() || fare.base_fare < 0.0 {
            return Err(ConfigError::InvalidValue(format!(
                "base_fare must be non-negative (got {})",
                fare.base_fare
            )));
        }
        if !fare.per_km_rate.is_finite() || fare.per_km_rate < 0.0 {
            return Err(ConfigError::InvalidValue(format!(
                "per_km_rate must be non-negative (got {})",
                fare.per_km_rate
            )));
        }
        if !fare.night_multiplier.is_finite() || fare.night_multiplier < 1.0 {
            return Err(ConfigError::InvalidValue(format!(
                "night_multiplier must be at least 1.0 (got {})",
                fare.night_multiplier
            )));
        }
        if fare.night_start_hour >= 24 || fare.night_end_hour >= 24 {
            return Err(ConfigError::InvalidValue(format!(
                "night hours must be between 0 and 23 (got {}-{})",
                fare.night_start_hour, fare.night_end_hour
            )));
        }
        Ok(())
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn rider_contact(&self) -> RiderContact {
        RiderContact {
            name: self.rider_name.clone(),
            phone: self.rider_phone.clone(),
            pickup: self.rider_pickup.clone(),
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PetTransit Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Catalog:        {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in sample)".to_string())
        )?;
        writeln!(f, "Base fare:      ${:.2}", self.fare.base_fare)?;
        writeln!(f, "Per km:         ${:.2}", self.fare.per_km_rate)?;
        writeln!(
            f,
            "Night:          x{} ({:02}:00 - {:02}:00)",
            self.fare.night_multiplier, self.fare.night_start_hour, self.fare.night_end_hour
        )?;
        writeln!(f, "Reset delay:    {} ms", self.reset_delay_ms)?;
        writeln!(f, "Rider:          {} ({})", self.rider_name, self.rider_phone)?;
        writeln!(f, "Pickup:         {}", self.rider_pickup)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
