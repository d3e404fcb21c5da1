//! Observing site configuration, read from a TOML file:
//!
//! ```toml
//! [site]
//! name = "Pic du Midi"
//! longitude = 0.142    # degrees, east positive
//! latitude = 42.936    # degrees
//! ```

use camino::Utf8Path;
use log::debug;
use serde::Deserialize;

use crate::altaz_errors::AltAzError;
use crate::constants::Degree;
use crate::observers::Observer;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteEntry {
    #[serde(default)]
    pub name: Option<String>,
    pub longitude: Degree,
    pub latitude: Degree,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub site: SiteEntry,
}

impl SiteConfig {
    pub fn from_toml_str(content: &str) -> Result<SiteConfig, AltAzError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Utf8Path) -> Result<SiteConfig, AltAzError> {
        debug!("loading site configuration from {path}");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validated observer for the configured site.
    pub fn observer(&self) -> Result<Observer, AltAzError> {
        Observer::new(
            self.site.longitude,
            self.site.latitude,
            self.site.name.clone(),
        )
    }
}
