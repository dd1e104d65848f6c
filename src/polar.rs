use chrono::{Duration, NaiveDate};

use crate::config::SolarConfig;
use crate::error::Result;
use crate::sun_path::daily_path_with;
use crate::types::{GeoCoordinate, LightingCondition, PolarCondition, SunPath};

/// Purely geometric: inside the Arctic or Antarctic circle.
pub fn is_polar_region(coordinate: &GeoCoordinate) -> bool {
    is_polar_region_with(coordinate, &SolarConfig::default())
}

pub fn is_polar_region_with(coordinate: &GeoCoordinate, config: &SolarConfig) -> bool {
    coordinate.latitude.abs() >= config.polar_circle_latitude
}

/// Lighting category for the day described by `path`.
pub fn classify(coordinate: &GeoCoordinate, path: &SunPath) -> PolarCondition {
    classify_with(coordinate, path, &SolarConfig::default())
}

pub fn classify_with(
    coordinate: &GeoCoordinate,
    path: &SunPath,
    config: &SolarConfig,
) -> PolarCondition {
    let max_elevation = path.max_elevation();
    let min_elevation = path.min_elevation();

    let (condition, daylight) = if path.is_polar_day() {
        (LightingCondition::MidnightSun, Some(Duration::hours(24)))
    } else if path.is_polar_night() {
        let condition = if max_elevation > config.civil_twilight_elevation {
            LightingCondition::CivilTwilight
        } else if max_elevation > config.nautical_twilight_elevation {
            LightingCondition::NauticalTwilight
        } else if max_elevation > config.astronomical_twilight_elevation {
            LightingCondition::AstronomicalTwilight
        } else {
            LightingCondition::PolarNight
        };
        (condition, Some(Duration::zero()))
    } else {
        let daylight = path.day_length().unwrap_or_else(|| path.sampled_daylight());
        (LightingCondition::Normal, Some(daylight))
    };

    PolarCondition {
        condition,
        description: condition.description().to_string(),
        is_polar_region: is_polar_region_with(coordinate, config),
        max_elevation,
        min_elevation,
        daylight,
    }
}

pub fn polar_condition(coordinate: &GeoCoordinate, date: NaiveDate) -> Result<PolarCondition> {
    polar_condition_with(coordinate, date, &SolarConfig::default())
}

pub fn polar_condition_with(
    coordinate: &GeoCoordinate,
    date: NaiveDate,
    config: &SolarConfig,
) -> Result<PolarCondition> {
    let path = daily_path_with(coordinate, date, config)?;
    Ok(classify_with(coordinate, &path, config))
}
