pub mod angles;
pub mod annual_table;
pub mod config;
pub mod constants;
pub mod ephemeris;
pub mod error;
pub mod polar;
pub mod sun_path;
pub mod types;

pub use angles::{
    deg_to_rad, hour_angle, local_solar_time, normalize_angle, rad_to_deg, refraction_correction,
    solar_azimuth, solar_elevation, solar_position, utc_lst_correction,
};

pub use annual_table::{annual_extremes, annual_table, days_in_year, leap_year};

pub use config::{intervals_per_day, SolarConfig};

pub use ephemeris::{
    declination, ecliptic_longitude, equation_of_time, equation_of_time_at, julian_day,
    mean_anomaly, mean_longitude,
};

pub use error::{Result, SolarError};

pub use polar::{
    classify, classify_with, is_polar_region, is_polar_region_with, polar_condition,
    polar_condition_with,
};

pub use sun_path::{
    daily_path, daily_path_with, daily_paths, local_midnight, narrow_bracket, refine_transition,
    refine_transition_with,
};

pub use types::{
    EquationOfTimeDatum, GeoCoordinate, LightingCondition, PolarCondition, SolarPosition, SunPath,
};
