//! Julian Day conversion and the low-precision solar ephemeris.
//!
//! Mean longitude and mean anomaly grow linearly with days since J2000,
//! which keeps the sun within a few hundredths of a degree of its true
//! place for dates near the epoch and degrades gracefully elsewhere.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};

use crate::angles::{deg_to_rad, normalize_angle, rad_to_deg};
use crate::constants::{
    CENTER_COEFF_1, CENTER_COEFF_2, ECCENTRICITY, J2000, MEAN_ANOMALY_AT_EPOCH, MEAN_ANOMALY_RATE,
    MEAN_LONGITUDE_AT_EPOCH, MEAN_LONGITUDE_RATE, MINUTES_PER_DEGREE, OBLIQUITY,
};

/// Continuous day count of a proleptic Gregorian instant.
///
/// January and February count as months 13 and 14 of the previous year
/// before the Gregorian leap-day correction is applied.
pub fn julian_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    let utc = dt.with_timezone(&Utc);
    let (mut year, mut month) = (utc.year() as f64, utc.month() as f64);
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }
    let seconds = utc.second() as f64 + utc.nanosecond() as f64 / 1e9;
    let hours = utc.hour() as f64 + utc.minute() as f64 / 60.0 + seconds / 3600.0;

    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor()
        + utc.day() as f64
        + hours / 24.0
        + b
        - 1524.5
}

pub fn days_since_j2000(julian_day: f64) -> f64 {
    julian_day - J2000
}

/// Mean solar longitude L, degrees in `[0, 360)`.
pub fn mean_longitude(julian_day: f64) -> f64 {
    normalize_angle(MEAN_LONGITUDE_AT_EPOCH + MEAN_LONGITUDE_RATE * days_since_j2000(julian_day))
}

/// Mean anomaly g, degrees in `[0, 360)`.
pub fn mean_anomaly(julian_day: f64) -> f64 {
    normalize_angle(MEAN_ANOMALY_AT_EPOCH + MEAN_ANOMALY_RATE * days_since_j2000(julian_day))
}

pub fn ecliptic_longitude(julian_day: f64) -> f64 {
    let g = deg_to_rad(mean_anomaly(julian_day));
    mean_longitude(julian_day) + CENTER_COEFF_1 * g.sin() + CENTER_COEFF_2 * (2.0 * g).sin()
}

/// Solar declination in degrees; never exceeds the obliquity in magnitude.
pub fn declination(julian_day: f64) -> f64 {
    let lambda = deg_to_rad(ecliptic_longitude(julian_day));
    let sin_dec = deg_to_rad(OBLIQUITY).sin() * lambda.sin();
    rad_to_deg(sin_dec.clamp(-1.0, 1.0).asin())
}

/// Equation of time in minutes at a Julian Day.
pub fn equation_of_time_at(julian_day: f64) -> f64 {
    let l = deg_to_rad(mean_longitude(julian_day));
    let g = deg_to_rad(mean_anomaly(julian_day));
    let y = (deg_to_rad(OBLIQUITY) / 2.0).tan().powi(2);

    let e = y * (2.0 * l).sin() - 2.0 * ECCENTRICITY * g.sin()
        - 0.5 * y * y * (4.0 * l).sin()
        - 1.25 * ECCENTRICITY * ECCENTRICITY * (2.0 * g).sin();

    MINUTES_PER_DEGREE * rad_to_deg(e)
}

/// Equation of time in minutes for a calendar date, taken at 12:00 UTC.
pub fn equation_of_time(date: NaiveDate) -> f64 {
    equation_of_time_at(julian_day(&noon_utc(date)))
}

pub(crate) fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

fn noon_utc(date: NaiveDate) -> DateTime<Utc> {
    midnight_utc(date) + Duration::hours(12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noon_is_half_a_day_after_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let diff = julian_day(&noon_utc(date)) - julian_day(&midnight_utc(date));
        assert!((diff - 0.5).abs() < 1e-9, "diff={diff}");
    }

    #[test]
    fn mean_angles_at_epoch() {
        assert!((mean_longitude(J2000) - MEAN_LONGITUDE_AT_EPOCH).abs() < 1e-9);
        assert!((mean_anomaly(J2000) - MEAN_ANOMALY_AT_EPOCH).abs() < 1e-9);
    }
}
