//! Greenwich Mean Sidereal Time and Earth Rotation Angle.
//!
//! Closed-form expressions, UT1 Julian Date in, radians out. UTC is used as
//! a stand-in for UT1 throughout the crate; the sub-second |UT1 - UTC| offset
//! is negligible against the second-level timing target.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

/// Julian Date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle at a given UT1 Julian Date, radians in [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    let theta = TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_48 * du);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a given UT1 Julian Date, radians in [0, 2π).
///
/// GMST = ERA + polynomial(T), T in Julian centuries from J2000.0.
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut1);
    let t = (jd_ut1 - J2000_JD) / 36525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time from GMST and observer east longitude, radians in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_at_j2000() {
        // ERA at J2000.0 is about 280.46°
        let deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!((deg - 280.4606).abs() < 0.001, "ERA at J2000 = {deg}");
    }

    #[test]
    fn test_gmst_known_epoch() {
        // 2023-06-01T03:00:00 UTC (JD 2460096.625); cross-checked against the
        // USNO approximation 18.697374558 + 24.06570982441908 * D hours.
        let deg = gmst_rad(2_460_096.625).to_degrees();
        assert!((deg - 294.34728).abs() < 0.001, "GMST = {deg}");
    }

    #[test]
    fn test_gmst_range() {
        for &jd in &[2_451_544.5, 2_451_545.0, 2_460_000.5, 2_440_000.5] {
            let g = gmst_rad(jd);
            assert!((0.0..TAU).contains(&g), "GMST out of range: {g}");
        }
    }

    #[test]
    fn test_lst_east_offset() {
        let gmst = 1.0;
        let lst = local_sidereal_time_rad(gmst, PI / 2.0);
        assert!((lst - (gmst + PI / 2.0)).abs() < 1e-15);
    }

    #[test]
    fn test_lst_wraps() {
        let lst = local_sidereal_time_rad(6.0, 1.0);
        assert!((0.0..TAU).contains(&lst));
    }
}
