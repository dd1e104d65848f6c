//! Day-long sampling of the solar position with refined sunrise and sunset.
//!
//! The day is sampled at a coarse fixed step; only the one or two
//! brackets where visibility flips are refined by bisection.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::{debug, trace};

use crate::angles::solar_position;
use crate::config::SolarConfig;
use crate::constants::MINUTES_PER_DEGREE;
use crate::ephemeris::midnight_utc;
use crate::error::{Result, SolarError};
use crate::types::{GeoCoordinate, SolarPosition, SunPath};

const MAX_BISECTION_STEPS: u32 = 64;

/// Narrow `[start, end]` around the visibility transition it contains
/// until it is no wider than `tolerance`.
///
/// The bracket must already contain exactly one transition of the
/// requested kind; this is not checked.
pub fn narrow_bracket(
    coordinate: &GeoCoordinate,
    mut start: DateTime<Utc>,
    mut end: DateTime<Utc>,
    finding_sunrise: bool,
    tolerance: Duration,
) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    coordinate.validate()?;

    let mut steps = 0;
    while end - start > tolerance && steps < MAX_BISECTION_STEPS {
        let mid = midpoint(start, end);
        let visible = solar_position(coordinate, &mid)?.is_visible();
        // Sunrise: invisible before, visible after. Sunset is the mirror.
        if visible == finding_sunrise {
            end = mid;
        } else {
            start = mid;
        }
        steps += 1;
        trace!(%start, %end, steps, "narrowed transition bracket");
    }
    Ok((start, end))
}

/// Sunrise or sunset position inside `[start, end]`, refined to the
/// default tolerance.
pub fn refine_transition(
    coordinate: &GeoCoordinate,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    finding_sunrise: bool,
) -> Result<SolarPosition> {
    refine_transition_with(coordinate, start, end, finding_sunrise, &SolarConfig::default())
}

pub fn refine_transition_with(
    coordinate: &GeoCoordinate,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    finding_sunrise: bool,
    config: &SolarConfig,
) -> Result<SolarPosition> {
    config.validate()?;
    let tolerance = Duration::try_seconds(config.refinement_tolerance_seconds).ok_or_else(|| {
        SolarError::InvalidConfig("refinement_tolerance_seconds out of range".into())
    })?;
    let (start, end) = narrow_bracket(coordinate, start, end, finding_sunrise, tolerance)?;
    solar_position(coordinate, &midpoint(start, end))
}

fn midpoint(start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
    start + (end - start) / 2
}

/// Local mean midnight of `date` at the given longitude.
pub fn local_midnight(date: NaiveDate, longitude: f64) -> DateTime<Utc> {
    let offset_ms = (MINUTES_PER_DEGREE * longitude * 60_000.0).round() as i64;
    midnight_utc(date) - Duration::milliseconds(offset_ms)
}

pub fn daily_path(coordinate: &GeoCoordinate, date: NaiveDate) -> Result<SunPath> {
    daily_path_with(coordinate, date, &SolarConfig::default())
}

pub fn daily_path_with(
    coordinate: &GeoCoordinate,
    date: NaiveDate,
    config: &SolarConfig,
) -> Result<SunPath> {
    coordinate.validate()?;
    config.validate()?;

    let step = Duration::minutes(config.sample_interval_minutes as i64);
    let start = local_midnight(date, coordinate.longitude);

    let positions = (0..config.samples_per_day())
        .map(|i| solar_position(coordinate, &(start + step * i)))
        .collect::<Result<Vec<_>>>()?;

    // First invisible -> visible flip is sunrise, last visible -> invisible is sunset.
    let sunrise_bracket = positions
        .windows(2)
        .find(|w| !w[0].is_visible() && w[1].is_visible())
        .map(|w| (w[0].instant, w[1].instant));
    let sunset_bracket = positions
        .windows(2)
        .rev()
        .find(|w| w[0].is_visible() && !w[1].is_visible())
        .map(|w| (w[0].instant, w[1].instant));

    let sunrise = sunrise_bracket
        .map(|(a, b)| refine_transition_with(coordinate, a, b, true, config))
        .transpose()?;
    let sunset = sunset_bracket
        .map(|(a, b)| refine_transition_with(coordinate, a, b, false, config))
        .transpose()?;

    debug!(
        %date,
        latitude = coordinate.latitude,
        longitude = coordinate.longitude,
        sunrise = ?sunrise.map(|p| p.instant),
        sunset = ?sunset.map(|p| p.instant),
        "built daily sun path"
    );

    Ok(SunPath {
        coordinate: *coordinate,
        date,
        positions,
        sunrise,
        sunset,
    })
}

/// One path per date of the inclusive range `first..=last`.
pub fn daily_paths(
    coordinate: &GeoCoordinate,
    first: NaiveDate,
    last: NaiveDate,
) -> Result<Vec<SunPath>> {
    coordinate.validate()?;
    first
        .iter_days()
        .take_while(|d| *d <= last)
        .map(|d| daily_path(coordinate, d))
        .collect()
}
