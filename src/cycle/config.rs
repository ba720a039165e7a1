//! Day/night cycle configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::sun::DayNightBoundaries;
use super::time::SECONDS_PER_DAY;
use crate::core::{Error, Result};

/// Settings read once before the first tick.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    /// Simulated seconds per real second. 0 = frozen, negative = backward.
    pub rate_multiplier: f64,
    /// Hour the clock starts at. Any finite value; wrapped into `[0, 24)`.
    pub start_hour: f64,
    /// Hour the sun rises, in `[0, 24)`.
    pub sunrise_hour: f64,
    /// Hour the sun sets, in `[0, 24)`. Must differ from `sunrise_hour`.
    pub sunset_hour: f64,
    /// Whether time advancement is paused.
    pub time_paused: bool,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            rate_multiplier: 60.0, // one simulated minute per real second
            start_hour: 10.0,
            sunrise_hour: 6.0,
            sunset_hour: 18.0,
            time_paused: false,
        }
    }
}

impl CycleConfig {
    /// Config whose rate makes one simulated day last `day_length_seconds`
    /// real seconds. Non-positive lengths freeze the clock.
    pub fn with_day_length(day_length_seconds: f64) -> Self {
        let rate_multiplier = if day_length_seconds > 0.0 {
            SECONDS_PER_DAY / day_length_seconds
        } else {
            0.0
        };
        Self {
            rate_multiplier,
            ..Self::default()
        }
    }

    /// Check every field and build the sunrise/sunset boundaries.
    pub fn validate(&self) -> Result<DayNightBoundaries> {
        if !self.rate_multiplier.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "rate multiplier {} is not finite",
                self.rate_multiplier
            )));
        }
        if !self.start_hour.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "start hour {} is not finite",
                self.start_hour
            )));
        }
        DayNightBoundaries::new(self.sunrise_hour, self.sunset_hour)
    }

    /// Parse from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded cycle config from {}", path.display());
        Ok(config)
    }

    /// Save as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }
}
