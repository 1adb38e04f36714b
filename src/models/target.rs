use serde::{Deserialize, Serialize};

use crate::error::{Result, TctError};

/// Equatorial (ICRS) coordinates of a fixed celestial target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoord {
    /// Right ascension in decimal degrees, stored in [0, 360)
    pub ra_deg: f64,
    /// Declination in decimal degrees (-90 to 90)
    pub dec_deg: f64,
}

impl EquatorialCoord {
    /// Create validated equatorial coordinates.
    ///
    /// RA is normalized modulo 360; declination outside [-90, 90] is rejected.
    pub fn new(ra_deg: f64, dec_deg: f64) -> Result<Self> {
        if !ra_deg.is_finite() {
            return Err(TctError::InvalidGeometry(format!(
                "right ascension {ra_deg} is not finite"
            )));
        }
        if !(-90.0..=90.0).contains(&dec_deg) {
            return Err(TctError::InvalidGeometry(format!(
                "declination {dec_deg} out of range [-90, 90]"
            )));
        }
        Ok(Self {
            ra_deg: ra_deg.rem_euclid(360.0),
            dec_deg,
        })
    }
}
