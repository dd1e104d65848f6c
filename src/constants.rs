//! Fixed astronomical parameters shared by every calculation.

/// Obliquity of the ecliptic, degrees.
pub const OBLIQUITY: f64 = 23.4397;

/// Eccentricity of the Earth's orbit.
pub const ECCENTRICITY: f64 = 0.0167;

/// Julian Day of 2000-01-01T12:00:00 UTC.
pub const J2000: f64 = 2451545.0;

/// Apparent solar radius plus standard horizon refraction, degrees.
pub const REFRACTION: f64 = 0.833;

pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const MINUTES_PER_DEGREE: f64 = 4.0;
pub const MINUTES_PER_DAY: i32 = 1440;

// Mean solar longitude and mean anomaly: epoch values and daily rates.
pub const MEAN_LONGITUDE_AT_EPOCH: f64 = 280.460;
pub const MEAN_LONGITUDE_RATE: f64 = 0.9856474;
pub const MEAN_ANOMALY_AT_EPOCH: f64 = 357.528;
pub const MEAN_ANOMALY_RATE: f64 = 0.9856003;

// Equation of center coefficients.
pub const CENTER_COEFF_1: f64 = 1.915;
pub const CENTER_COEFF_2: f64 = 0.020;

/// Above this elevation refraction is treated as zero.
pub const REFRACTION_CUTOFF_ELEVATION: f64 = 85.0;
