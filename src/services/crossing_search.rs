//! Altitude-crossing grid search.
//!
//! Samples the target altitude on a uniform time grid across a window,
//! brackets sign changes of `altitude - target_altitude` that match the
//! requested direction, and refines each bracket by linear interpolation.
//! Among the refined crossings, the one nearest the window center wins.
//!
//! A window that contains no matching crossing yields `None`. That covers
//! both "the target never reaches this altitude" and "the crossing lies
//! outside the window"; callers do not distinguish the two.

use serde::Serialize;

use crate::astro::horizontal::altitude_deg;
use crate::models::{EquatorialCoord, ModifiedJulianDate, ObserverSite};

/// Default search half-width around the window center, minutes.
pub const DEFAULT_HALF_WIDTH_MIN: f64 = 10.0;

/// Default number of altitude samples across the window.
pub const DEFAULT_GRID_POINTS: usize = 1800;

/// Which way the altitude passes through the target value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// Altitude increasing through the target value.
    Rising,
    /// Altitude decreasing through the target value.
    Setting,
}

/// Time window for one crossing search attempt. Transient, rebuilt per attempt.
#[derive(Debug, Clone, Copy)]
pub struct SearchWindow {
    /// Center of the window; crossings are ranked by distance to it.
    pub center: ModifiedJulianDate,
    /// Half-width of the window in minutes.
    pub half_width_min: f64,
    /// Number of grid samples across the full window span.
    pub n_grid_points: usize,
}

impl SearchWindow {
    pub fn new(center: ModifiedJulianDate, half_width_min: f64, n_grid_points: usize) -> Self {
        Self {
            center,
            half_width_min,
            n_grid_points,
        }
    }

    /// Window with the default half-width and grid resolution.
    pub fn with_defaults(center: ModifiedJulianDate) -> Self {
        Self::new(center, DEFAULT_HALF_WIDTH_MIN, DEFAULT_GRID_POINTS)
    }
}

/// Find the crossing of `target_altitude_deg` nearest the window center.
///
/// Returns `None` when no bracket of the requested direction exists in the
/// window. Degenerate windows (zero or negative half-width, fewer than two
/// grid points) also return `None` rather than erroring: the selector simply
/// has one fewer candidate.
pub fn find_crossing(
    site: &ObserverSite,
    target: &EquatorialCoord,
    target_altitude_deg: f64,
    window: SearchWindow,
    direction: Direction,
) -> Option<ModifiedJulianDate> {
    let n = window.n_grid_points;
    if n < 2 || window.half_width_min <= 0.0 || !window.half_width_min.is_finite() {
        return None;
    }

    let half_width_days = window.half_width_min / 1440.0;
    let t_start = window.center.value() - half_width_days;
    let step_days = 2.0 * half_width_days / (n - 1) as f64;

    let mut best: Option<f64> = None;
    let mut prev = residual(site, target, target_altitude_deg, t_start);

    for i in 1..n {
        let t = t_start + i as f64 * step_days;
        let cur = residual(site, target, target_altitude_deg, t);

        let bracketed = match direction {
            Direction::Rising => prev < 0.0 && cur >= 0.0,
            Direction::Setting => prev > 0.0 && cur <= 0.0,
        };

        if bracketed {
            // Linear interpolation inside the bracket. The grid step is well
            // under a second at default resolution, so the local altitude
            // curve is effectively linear.
            let frac = prev / (prev - cur);
            let t_cross = t - step_days + frac * step_days;
            let dist = (t_cross - window.center.value()).abs();
            if best.map_or(true, |b| dist < (b - window.center.value()).abs()) {
                best = Some(t_cross);
            }
        }

        prev = cur;
    }

    best.map(ModifiedJulianDate::new)
}

fn residual(
    site: &ObserverSite,
    target: &EquatorialCoord,
    target_altitude_deg: f64,
    t_mjd: f64,
) -> f64 {
    altitude_deg(site, target, ModifiedJulianDate::new(t_mjd)) - target_altitude_deg
}
