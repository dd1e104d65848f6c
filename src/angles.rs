use chrono::{DateTime, TimeZone, Timelike, Utc};

use crate::constants::{
    DEGREES_PER_HOUR, DEG_TO_RAD, MINUTES_PER_DEGREE, RAD_TO_DEG, REFRACTION,
    REFRACTION_CUTOFF_ELEVATION,
};
use crate::ephemeris::{declination, equation_of_time, julian_day};
use crate::error::Result;
use crate::types::{GeoCoordinate, SolarPosition};

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DEG_TO_RAD
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD_TO_DEG
}

/// Reduce an angle to `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Hours to add to UTC clock time to get apparent local solar time.
pub fn utc_lst_correction(longitude: f64, eot: f64) -> f64 {
    (MINUTES_PER_DEGREE * longitude + eot) / 60.0
}

pub fn local_solar_time(utc_hours: f64, longitude: f64, eot: f64) -> f64 {
    (utc_hours + utc_lst_correction(longitude, eot)).rem_euclid(24.0)
}

pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

/// Geometric elevation of the sun, without refraction.
pub fn solar_elevation(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_elev =
        dec_rad.sin() * lat_rad.sin() + dec_rad.cos() * lat_rad.cos() * ha_rad.cos();
    rad_to_deg(sin_elev.clamp(-1.0, 1.0).asin())
}

/// Azimuth clockwise from north, `[0, 360)`.
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let y = ha_rad.sin();
    let x = ha_rad.cos() * lat_rad.sin() - dec_rad.tan() * lat_rad.cos();
    normalize_angle(rad_to_deg(y.atan2(x)) + 180.0)
}

/// Atmospheric refraction in degrees for a geometric elevation.
///
/// Uses Sæmundsson's cotangent formula. Zero at or below `-REFRACTION`
/// and above 85°, where the correction is negligible.
pub fn refraction_correction(elevation: f64) -> f64 {
    if elevation <= -REFRACTION || elevation > REFRACTION_CUTOFF_ELEVATION {
        return 0.0;
    }
    let arg = deg_to_rad(elevation + 10.3 / (elevation + 5.11));
    let arcminutes = 1.02 / arg.tan();
    arcminutes / 60.0
}

/// Apparent azimuth and elevation of the sun.
///
/// The hour angle is corrected with the equation of time of the
/// instant's UTC date.
pub fn solar_position<Tz: TimeZone>(
    coordinate: &GeoCoordinate,
    dt: &DateTime<Tz>,
) -> Result<SolarPosition> {
    coordinate.validate()?;

    let utc = dt.with_timezone(&Utc);
    let utc_hours = (utc.num_seconds_from_midnight() as f64 + utc.nanosecond() as f64 / 1e9)
        / 3600.0;
    let jd = julian_day(&utc);
    let decl = declination(jd);
    let eot = equation_of_time(utc.date_naive());

    let lst = local_solar_time(utc_hours, coordinate.longitude, eot);
    let ha = hour_angle(lst);
    let geometric = solar_elevation(coordinate.latitude, decl, ha);
    let elevation = (geometric + refraction_correction(geometric)).clamp(-90.0, 90.0);
    let azimuth = solar_azimuth(coordinate.latitude, decl, ha);

    Ok(SolarPosition {
        azimuth,
        elevation,
        declination: decl,
        hour_angle: ha,
        instant: utc,
        coordinate: *coordinate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refraction_bounded_near_horizon() {
        let mut e = -REFRACTION + 1e-6;
        while e <= 90.0 {
            let r = refraction_correction(e);
            assert!(r.is_finite() && (0.0..1.0).contains(&r), "e={e} r={r}");
            e += 0.05;
        }
    }

    #[test]
    fn refraction_decreases_with_elevation() {
        assert!(refraction_correction(0.0) > refraction_correction(10.0));
        assert!(refraction_correction(10.0) > refraction_correction(45.0));
        assert_eq!(refraction_correction(86.0), 0.0);
        assert_eq!(refraction_correction(-1.0), 0.0);
    }
}
