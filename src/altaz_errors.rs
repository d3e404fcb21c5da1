use thiserror::Error;

use crate::constants::Degree;

#[derive(Error, Debug)]
pub enum AltAzError {
    #[error("Invalid right ascension: {0}")]
    InvalidRightAscension(String),

    #[error("Invalid declination: {0}")]
    InvalidDeclination(String),

    #[error("Latitude out of range [-90, 90]: {0}")]
    InvalidLatitude(Degree),

    #[error("Non-finite {0} for observing site")]
    NonFiniteSiteCoordinate(&'static str),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("No observing site given (use a site file or both longitude and latitude)")]
    MissingSite,

    #[error("Unable to read site configuration: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unable to parse site configuration: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

impl PartialEq for AltAzError {
    fn eq(&self, other: &Self) -> bool {
        use AltAzError::*;
        match (self, other) {
            (InvalidRightAscension(a), InvalidRightAscension(b)) => a == b,
            (InvalidDeclination(a), InvalidDeclination(b)) => a == b,
            (InvalidLatitude(a), InvalidLatitude(b)) => a == b,
            (NonFiniteSiteCoordinate(a), NonFiniteSiteCoordinate(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (MissingSite, MissingSite) => true,

            // Wrapped errors are not comparable: same variant is enough
            (IoError(_), IoError(_)) => true,
            (ConfigParseError(_), ConfigParseError(_)) => true,

            _ => false,
        }
    }
}
