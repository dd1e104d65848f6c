use serde::{Deserialize, Serialize};

use crate::constants::MINUTES_PER_DAY;
use crate::error::{Result, SolarError};

/// Upper bound for the bisection tolerance: one day.
pub const MAX_REFINEMENT_TOLERANCE_SECONDS: i64 = 86_400;

/// Tunables for path sampling, event refinement and classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarConfig {
    pub sample_interval_minutes: i32,
    pub refinement_tolerance_seconds: i64,
    pub civil_twilight_elevation: f64,
    pub nautical_twilight_elevation: f64,
    pub astronomical_twilight_elevation: f64,
    pub polar_circle_latitude: f64,
}

impl Default for SolarConfig {
    fn default() -> Self {
        Self {
            sample_interval_minutes: 15,
            refinement_tolerance_seconds: 30,
            civil_twilight_elevation: -6.0,
            nautical_twilight_elevation: -12.0,
            astronomical_twilight_elevation: -18.0,
            polar_circle_latitude: 66.5,
        }
    }
}

impl SolarConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let interval = self.sample_interval_minutes;
        if interval <= 0 || MINUTES_PER_DAY % interval != 0 {
            return Err(SolarError::InvalidConfig(format!(
                "sample_interval_minutes must divide {MINUTES_PER_DAY}, got {interval}"
            )));
        }
        let tolerance = self.refinement_tolerance_seconds;
        if tolerance <= 0 || tolerance > MAX_REFINEMENT_TOLERANCE_SECONDS {
            return Err(SolarError::InvalidConfig(format!(
                "refinement_tolerance_seconds must be in 1..={MAX_REFINEMENT_TOLERANCE_SECONDS}, got {tolerance}"
            )));
        }
        if !(0.0 > self.civil_twilight_elevation
            && self.civil_twilight_elevation > self.nautical_twilight_elevation
            && self.nautical_twilight_elevation > self.astronomical_twilight_elevation)
        {
            return Err(SolarError::InvalidConfig(
                "twilight elevations must satisfy 0 > civil > nautical > astronomical".into(),
            ));
        }
        if !(self.polar_circle_latitude > 0.0 && self.polar_circle_latitude <= 90.0) {
            return Err(SolarError::InvalidConfig(
                "polar_circle_latitude must be in (0, 90]".into(),
            ));
        }
        Ok(())
    }

    pub fn samples_per_day(&self) -> i32 {
        intervals_per_day(self.sample_interval_minutes)
    }
}

pub fn intervals_per_day(interval_minutes: i32) -> i32 {
    MINUTES_PER_DAY / interval_minutes
}
