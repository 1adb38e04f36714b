use serde::{Deserialize, Serialize};

use crate::error::{Result, TctError};

/// Geodetic position of the observing site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverSite {
    /// Latitude in decimal degrees (-90 to 90)
    pub latitude_deg: f64,
    /// Longitude in decimal degrees, east positive, stored in -180..180
    pub longitude_deg: f64,
    /// Elevation in meters above sea level
    pub elevation_m: f64,
}

impl ObserverSite {
    /// Create a validated observer site.
    ///
    /// Longitude is accepted in either -180..180 or 0..360 convention and
    /// normalized to -180..180. Elevation below -500 m is rejected.
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(TctError::InvalidGeometry(format!(
                "latitude {latitude_deg} out of range [-90, 90]"
            )));
        }
        if !(-180.0..=360.0).contains(&longitude_deg) {
            return Err(TctError::InvalidGeometry(format!(
                "longitude {longitude_deg} out of range [-180, 360]"
            )));
        }
        if elevation_m < -500.0 {
            return Err(TctError::InvalidGeometry(format!(
                "elevation {elevation_m} m below -500 m"
            )));
        }
        let longitude_deg = if longitude_deg > 180.0 {
            longitude_deg - 360.0
        } else {
            longitude_deg
        };
        Ok(Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
        })
    }
}
