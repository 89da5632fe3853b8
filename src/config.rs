//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! salah-config.toml file. It provides the default location, calculation
//! method and refresh cadence; command-line flags override any of them.

use crate::{
    CalculationMethod, LocalDate, MethodPreset, SalahError, ScheduleRequest, ShadowConvention,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "salah-config.toml";

/// Application configuration loaded from salah-config.toml
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Observer location and clock offset
    #[serde(default)]
    pub location: LocationConfig,
    /// Twilight angles and Asr convention
    #[serde(default)]
    pub calculation: CalculationConfig,
    /// Watch-mode cadence and lookup caching
    #[serde(default)]
    pub refresh: RefreshConfig,
}

/// Observer location configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LocationConfig {
    /// Human-readable place name for reference
    pub name: String,
    /// Degrees north
    pub latitude: f64,
    /// Degrees east (negative for the Americas)
    pub longitude: f64,
    /// Fixed hours from UTC; no daylight-saving adjustment is applied
    pub utc_offset_hours: f64,
}

/// Calculation method configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CalculationConfig {
    /// Named twilight-angle preset
    #[serde(default)]
    pub method: MethodPreset,
    /// Asr shadow convention
    #[serde(default)]
    pub asr: ShadowConvention,
    /// Overrides the preset's Fajr angle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fajr_angle: Option<f64>,
    /// Overrides the preset's Isha angle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isha_angle: Option<f64>,
}

/// Refresh and caching configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RefreshConfig {
    /// Seconds between recomputations in watch mode
    pub interval_seconds: u64,
    /// How long a geolocation lookup stays valid, in minutes
    pub lookup_cache_ttl_minutes: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        RefreshConfig {
            interval_seconds: 60,
            lookup_cache_ttl_minutes: 30,
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        LocationConfig {
            name: "New York, NY".to_string(),
            latitude: 40.7128,
            longitude: -74.0060,
            utc_offset_hours: -5.0, // EST, no DST
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            location: LocationConfig::default(),
            calculation: CalculationConfig::default(),
            refresh: RefreshConfig::default(),
        }
    }
}

impl CalculationConfig {
    /// Preset angles with any configured overrides applied.
    pub fn method(&self) -> CalculationMethod {
        let preset = self.method.method();
        CalculationMethod {
            fajr_angle: self.fajr_angle.unwrap_or(preset.fajr_angle),
            isha_angle: self.isha_angle.unwrap_or(preset.isha_angle),
        }
    }
}

impl Config {
    /// Load configuration from salah-config.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!("Loaded configuration for {}", config.location.name);
                    config
                }
                Err(e) => {
                    warn!("Invalid config file format in {}: {}", path.display(), e);
                    warn!("Using default configuration (New York, NY)");
                    Self::default()
                }
            },
            Err(_) => {
                info!(
                    "No config file at {}, using default configuration (New York, NY)",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Validate the configured values into a request for `date`.
    pub fn request_for(&self, date: LocalDate) -> Result<ScheduleRequest, SalahError> {
        ScheduleRequest::new(
            self.location.latitude,
            self.location.longitude,
            self.location.utc_offset_hours,
            date,
            self.calculation.method(),
            self.calculation.asr,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.location.name, "New York, NY");
        assert_eq!(config.location.latitude, 40.7128);
        assert_eq!(config.location.utc_offset_hours, -5.0);
        assert_eq!(config.calculation.method, MethodPreset::Mwl);
        assert_eq!(config.calculation.asr, ShadowConvention::Standard);
        assert_eq!(config.refresh.interval_seconds, 60);
        assert_eq!(config.refresh.lookup_cache_ttl_minutes, 30);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let config = Config::load_from_path("/nonexistent/path");
        // Should fallback to default
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[location]
name = "Mecca"
latitude = 21.4225
longitude = 39.8262
utc_offset_hours = 3.0

[calculation]
method = "umm-al-qura"
asr = "hanafi"
isha_angle = 16.5
"#
        )
        .unwrap();

        let config = Config::load_from_path(file.path());
        assert_eq!(config.location.name, "Mecca");
        assert_eq!(config.calculation.method, MethodPreset::UmmAlQura);
        assert_eq!(config.calculation.asr, ShadowConvention::Hanafi);
        assert_eq!(config.refresh, RefreshConfig::default());

        let method = config.calculation.method();
        assert_eq!(method.fajr_angle, 18.0);
        assert_eq!(method.isha_angle, 16.5);
    }

    #[test]
    fn test_load_file_without_location() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[calculation]\nmethod = \"isna\"\nasr = \"hanafi\"").unwrap();

        let config = Config::load_from_path(file.path());
        assert_eq!(config.calculation.method, MethodPreset::Isna);
        assert_eq!(config.calculation.asr, ShadowConvention::Hanafi);
        assert_eq!(config.location, LocationConfig::default());
    }

    #[test]
    fn test_load_malformed_file_falls_back() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[location]\nlatitude = \"north\"").unwrap();
        assert_eq!(Config::load_from_path(file.path()), Config::default());
    }

    #[test]
    fn test_request_validates_configured_values() {
        let date = LocalDate::new(2024, 6, 21).unwrap();
        let request = Config::default().request_for(date).unwrap();
        assert_eq!(request.location.longitude, -74.0060);
        assert_eq!(request.offset.hours(), -5.0);

        let mut broken = Config::default();
        broken.location.latitude = 123.0;
        assert_eq!(
            broken.request_for(date),
            Err(SalahError::InvalidLatitude(123.0))
        );
    }
}
