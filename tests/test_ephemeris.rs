use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use sun_path::constants::{J2000, OBLIQUITY};
use sun_path::ephemeris::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn jd_noon(y: i32, mo: u32, d: u32) -> f64 {
    julian_day(&utc(y, mo, d, 12, 0, 0))
}

// ── JulianDay ──

#[test]
fn test_julian_day_j2000_exact() {
    assert_eq!(julian_day(&utc(2000, 1, 1, 12, 0, 0)), J2000);
}

#[test]
fn test_julian_day_known_values() {
    assert_approx!(julian_day(&utc(2000, 1, 1, 0, 0, 0)), 2451544.5, 1e-9);
    assert_approx!(julian_day(&utc(1999, 1, 1, 0, 0, 0)), 2451179.5, 1e-9);
    assert_approx!(julian_day(&utc(1987, 1, 27, 0, 0, 0)), 2446822.5, 1e-9);
    assert_approx!(julian_day(&utc(1988, 6, 19, 12, 0, 0)), 2447332.0, 1e-9);
    assert_approx!(julian_day(&utc(1900, 1, 1, 0, 0, 0)), 2415020.5, 1e-9);
    assert_approx!(julian_day(&utc(1600, 12, 31, 0, 0, 0)), 2305812.5, 1e-9);
}

#[test]
fn test_julian_day_fractional_day() {
    let base = julian_day(&utc(2024, 5, 5, 0, 0, 0));
    assert_approx!(julian_day(&utc(2024, 5, 5, 6, 0, 0)) - base, 0.25, 1e-9);
    assert_approx!(julian_day(&utc(2024, 5, 5, 18, 30, 0)) - base, 18.5 / 24.0, 1e-9);
    assert_approx!(julian_day(&utc(2024, 5, 5, 0, 0, 36)) - base, 36.0 / 86400.0, 1e-9);
}

#[test]
fn test_julian_day_leap_day_continuity() {
    let feb28 = jd_noon(2024, 2, 28);
    let feb29 = jd_noon(2024, 2, 29);
    let mar1 = jd_noon(2024, 3, 1);
    assert_approx!(feb29 - feb28, 1.0, 1e-9);
    assert_approx!(mar1 - feb29, 1.0, 1e-9);
    assert_approx!(jd_noon(2023, 3, 1) - jd_noon(2023, 2, 28), 1.0, 1e-9);
}

#[test]
fn test_julian_day_far_dates_are_finite() {
    for year in [1, 1066, 1582, 2100, 2500, 9999] {
        assert!(jd_noon(year, 7, 1).is_finite(), "year={}", year);
    }
}

// ── Mean angles ──

#[test]
fn test_mean_angles_normalized() {
    for days in [-40000.0, -1.0, 0.0, 365.25, 12345.6, 80000.0] {
        let jd = J2000 + days;
        assert!((0.0..360.0).contains(&mean_longitude(jd)));
        assert!((0.0..360.0).contains(&mean_anomaly(jd)));
    }
}

// ── Declination ──

#[test]
fn test_declination_bounded_by_obliquity() {
    let start = julian_day(&utc(1950, 1, 1, 0, 0, 0));
    let mut jd = start;
    while jd < start + 365.25 * 100.0 {
        let d = declination(jd);
        assert!(d.abs() <= OBLIQUITY + 1e-9, "jd={} declination={}", jd, d);
        jd += 1.37;
    }
}

#[test]
fn test_declination_equinoxes_and_solstices() {
    for year in [2023, 2024, 2025] {
        assert_approx!(declination(jd_noon(year, 3, 20)), 0.0, 2.0);
        assert_approx!(declination(jd_noon(year, 9, 22)), 0.0, 2.0);
        assert_approx!(declination(jd_noon(year, 6, 21)), 23.4, 1.0);
        assert_approx!(declination(jd_noon(year, 12, 21)), -23.4, 1.0);
    }
}

#[test]
fn test_declination_sign_by_season() {
    assert!(declination(jd_noon(2024, 5, 1)) > 10.0);
    assert!(declination(jd_noon(2024, 11, 1)) < -10.0);
}

// ── Equation of time ──

#[test]
fn test_equation_of_time_known_dates() {
    let eot = |m, d| equation_of_time(NaiveDate::from_ymd_opt(2024, m, d).unwrap());
    assert_approx!(eot(2, 12), -14.2, 1.0);
    assert_approx!(eot(5, 14), 3.7, 1.0);
    assert_approx!(eot(7, 26), -6.5, 1.0);
    assert_approx!(eot(11, 3), 16.4, 1.0);
    // Near zero around mid-April, mid-June, start of September and Christmas.
    assert_approx!(eot(4, 15), 0.0, 1.0);
    assert_approx!(eot(6, 13), 0.0, 1.0);
    assert_approx!(eot(9, 1), 0.0, 1.0);
    assert_approx!(eot(12, 25), 0.0, 1.0);
}

#[test]
fn test_equation_of_time_date_is_noon_value() {
    let date = NaiveDate::from_ymd_opt(2024, 8, 8).unwrap();
    let at_noon = equation_of_time_at(jd_noon(2024, 8, 8));
    assert_eq!(equation_of_time(date), at_noon);
}
