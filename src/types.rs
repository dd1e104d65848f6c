use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SolarError};

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Observer location in degrees, north and east positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    pub fn is_valid(&self) -> bool {
        (MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude)
            && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude)
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SolarError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// Apparent position of the sun for one location and instant.
///
/// `azimuth` is measured clockwise from true north in `[0, 360)`,
/// `elevation` includes the refraction correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPosition {
    pub azimuth: f64,
    pub elevation: f64,
    pub declination: f64,
    pub hour_angle: f64,
    pub instant: DateTime<Utc>,
    pub coordinate: GeoCoordinate,
}

impl SolarPosition {
    pub fn is_visible(&self) -> bool {
        self.elevation > 0.0
    }

    pub fn zenith(&self) -> f64 {
        90.0 - self.elevation
    }
}

/// Sampled course of the sun over one calendar date.
///
/// `sunrise` and `sunset` are `None` when no such transition happens
/// during the sampled day, which is how polar day and polar night show up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunPath {
    pub coordinate: GeoCoordinate,
    pub date: NaiveDate,
    pub positions: Vec<SolarPosition>,
    pub sunrise: Option<SolarPosition>,
    pub sunset: Option<SolarPosition>,
}

impl SunPath {
    pub fn is_polar_day(&self) -> bool {
        !self.positions.is_empty() && self.positions.iter().all(SolarPosition::is_visible)
    }

    pub fn is_polar_night(&self) -> bool {
        !self.positions.iter().any(SolarPosition::is_visible)
    }

    pub fn max_elevation(&self) -> f64 {
        self.positions
            .iter()
            .map(|p| p.elevation)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min_elevation(&self) -> f64 {
        self.positions
            .iter()
            .map(|p| p.elevation)
            .fold(f64::INFINITY, f64::min)
    }

    /// Highest sample of the day.
    pub fn culmination(&self) -> Option<&SolarPosition> {
        self.positions
            .iter()
            .max_by(|a, b| a.elevation.total_cmp(&b.elevation))
    }

    /// Visible samples times the sampling step. Coarse, but defined even
    /// when sunset precedes sunrise or one of them is missing.
    pub fn sampled_daylight(&self) -> Duration {
        let step = match self.positions.as_slice() {
            [first, second, ..] => second.instant - first.instant,
            _ => return Duration::zero(),
        };
        let visible = self.positions.iter().filter(|p| p.is_visible()).count();
        step * visible as i32
    }

    pub fn day_length(&self) -> Option<Duration> {
        let (sunrise, sunset) = (self.sunrise?, self.sunset?);
        (sunset.instant > sunrise.instant).then(|| sunset.instant - sunrise.instant)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightingCondition {
    Normal,
    MidnightSun,
    PolarNight,
    CivilTwilight,
    NauticalTwilight,
    AstronomicalTwilight,
}

impl LightingCondition {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Normal day and night cycle",
            Self::MidnightSun => "Midnight sun: the sun stays above the horizon all day",
            Self::PolarNight => "Polar night: the sun stays more than 18° below the horizon",
            Self::CivilTwilight => "Sun below the horizon all day, civil twilight at best",
            Self::NauticalTwilight => "Sun below the horizon all day, nautical twilight at best",
            Self::AstronomicalTwilight => {
                "Sun below the horizon all day, astronomical twilight at best"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarCondition {
    pub condition: LightingCondition,
    pub description: String,
    pub is_polar_region: bool,
    pub max_elevation: f64,
    pub min_elevation: f64,
    #[serde(with = "optional_seconds")]
    pub daylight: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquationOfTimeDatum {
    pub date: NaiveDate,
    pub day_of_year: u32,
    /// Positive when the apparent sun is ahead of the mean sun.
    pub minutes: f64,
}

mod optional_seconds {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(d: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        d.map(|d| d.num_seconds()).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<i64>::deserialize(d)?.map(Duration::seconds))
    }
}
