//! Three-window candidate selection.
//!
//! The grid search is sensitive to where its window happens to start: the
//! same true crossing can be found with different precision, or missed at a
//! window edge, depending on placement. Running the search from three offset
//! start times (reference - delta, reference, reference + delta) for both
//! directions and keeping the candidate closest to the reference makes the
//! answer robust to that placement.

use serde::Serialize;
use tracing::debug;

use crate::models::{EquatorialCoord, ModifiedJulianDate, ObserverSite};
use crate::services::crossing_search::{find_crossing, Direction, SearchWindow};

/// One successful crossing search attempt.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CrossingCandidate {
    /// UTC instant of the altitude crossing.
    pub time: ModifiedJulianDate,
    /// Whether the target was rising or setting through the altitude.
    pub direction: Direction,
    /// Signed `time - reference` in seconds; positive when the crossing is
    /// after the reference.
    pub diff_seconds: f64,
}

/// Terminal result of one solver invocation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CrossingSolution {
    /// The reference timestamp the candidates were compared against.
    pub reference: ModifiedJulianDate,
    /// Candidate with the smallest |diff_seconds|, if any attempt succeeded.
    pub best: Option<CrossingCandidate>,
}

/// Find the altitude crossing nearest a reference timestamp.
///
/// Runs six search attempts (three start times × rising/setting, in that
/// order) and selects the candidate minimizing |diff_seconds|; ties keep the
/// first-encountered candidate. An absent `target_altitude_deg` or an empty
/// candidate list yields `best: None` — an expected outcome, not an error.
pub fn solve(
    site: &ObserverSite,
    target: &EquatorialCoord,
    target_altitude_deg: Option<f64>,
    reference: ModifiedJulianDate,
    delta_min: f64,
    n_grid_points: usize,
) -> CrossingSolution {
    let Some(altitude) = target_altitude_deg else {
        debug!("no target altitude supplied, skipping search");
        return CrossingSolution {
            reference,
            best: None,
        };
    };

    let delta_seconds = delta_min * 60.0;
    let mut best: Option<CrossingCandidate> = None;

    for offset in [-delta_seconds, 0.0, delta_seconds] {
        let start = reference.add_seconds(offset);
        for direction in [Direction::Rising, Direction::Setting] {
            let window = SearchWindow::new(start, delta_min, n_grid_points);
            let Some(time) = find_crossing(site, target, altitude, window, direction) else {
                debug!(offset, ?direction, "no crossing in window");
                continue;
            };
            let candidate = CrossingCandidate {
                time,
                direction,
                diff_seconds: time.diff_seconds(reference),
            };
            debug!(offset, ?direction, diff = candidate.diff_seconds, "candidate");
            if best.map_or(true, |b| {
                candidate.diff_seconds.abs() < b.diff_seconds.abs()
            }) {
                best = Some(candidate);
            }
        }
    }

    CrossingSolution { reference, best }
}
