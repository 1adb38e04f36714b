//! Observer site configuration file support.
//!
//! Reads the observing site description from a TOML file so batch drivers do
//! not have to repeat coordinates on every invocation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TctError};
use crate::models::ObserverSite;

/// Site configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSettings,
}

/// Observing site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Human-readable site name, informational only.
    pub name: Option<String>,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive.
    pub longitude: f64,
    /// Elevation in meters above sea level.
    #[serde(default)]
    pub elevation_m: f64,
}

impl SiteConfig {
    /// Load site configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            TctError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: SiteConfig = toml::from_str(&content).map_err(|e| {
            TctError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load site configuration from the default locations.
    ///
    /// Searches for `site.toml` in the current directory, `config/`, and the
    /// parent directory, in that order.
    pub fn from_default_location() -> Result<Self> {
        let search_paths = [
            PathBuf::from("site.toml"),
            PathBuf::from("config/site.toml"),
            PathBuf::from("../site.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(TctError::Configuration(
            "No site.toml found in standard locations".to_string(),
        ))
    }

    /// Validated observer site from the settings.
    pub fn to_observer_site(&self) -> Result<ObserverSite> {
        ObserverSite::new(
            self.site.latitude,
            self.site.longitude,
            self.site.elevation_m,
        )
    }
}
