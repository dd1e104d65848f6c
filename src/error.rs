use thiserror::Error;

pub type Result<T, E = SolarError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SolarError {
    #[error(
        "Invalid coordinate ({latitude}°, {longitude}°): latitude must be between -90° and 90°, longitude between -180° and 180°"
    )]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Year must be a positive calendar year, got {0}")]
    InvalidYear(i32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
