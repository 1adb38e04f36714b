//! Equatorial → horizontal (alt/az) transform.
//!
//! Topocentric in direction only: the site elevation does not enter the
//! transform for targets at stellar distances, and no refraction is applied.

use serde::Serialize;

use crate::astro::sidereal::{gmst_rad, local_sidereal_time_rad};
use crate::models::{EquatorialCoord, ModifiedJulianDate, ObserverSite};

/// Horizontal coordinates of a target at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalCoord {
    /// Altitude above the horizon in degrees (-90 to 90)
    pub altitude_deg: f64,
    /// Azimuth in degrees, north = 0, east = 90, in [0, 360)
    pub azimuth_deg: f64,
}

/// Compute horizontal coordinates for a target at a UTC instant.
///
/// Hour angle comes from local sidereal time and the target RA; altitude and
/// azimuth fall out of the topocentric unit vector (the altitude component is
/// the standard spherical law of cosines).
pub fn horizontal(
    site: &ObserverSite,
    target: &EquatorialCoord,
    time: ModifiedJulianDate,
) -> HorizontalCoord {
    let gmst = gmst_rad(time.to_julian_date());
    let lst = local_sidereal_time_rad(gmst, site.longitude_deg.to_radians());
    let hour_angle = lst - target.ra_deg.to_radians();

    let (sin_phi, cos_phi) = site.latitude_deg.to_radians().sin_cos();
    let (sin_dec, cos_dec) = target.dec_deg.to_radians().sin_cos();
    let (sin_h, cos_h) = hour_angle.sin_cos();

    // Unit vector in the local horizon frame: x north, y east, z up.
    let north = -cos_dec * cos_h * sin_phi + sin_dec * cos_phi;
    let east = -cos_dec * sin_h;
    let up = sin_dec * sin_phi + cos_dec * cos_h * cos_phi;

    HorizontalCoord {
        altitude_deg: up.clamp(-1.0, 1.0).asin().to_degrees(),
        azimuth_deg: east.atan2(north).to_degrees().rem_euclid(360.0),
    }
}

/// Altitude alone, in degrees. This is the function the crossing search roots.
pub fn altitude_deg(
    site: &ObserverSite,
    target: &EquatorialCoord,
    time: ModifiedJulianDate,
) -> f64 {
    horizontal(site, target, time).altitude_deg
}
