//! Output record for one solved observation.
//!
//! The record is the boundary back to whatever drives the solver: a CSV row
//! matching `OBJECT,FILTER,DATETIME,DIFFTIME_S`, or the same fields as JSON.
//! An observation without a crossing renders empty DATETIME/DIFFTIME fields.

use serde::Serialize;

use crate::services::crossing_solver::CrossingSolution;

/// CSV header matching [`CrossingRecord::csv_row`].
pub const CSV_HEADER: &str = "OBJECT,FILTER,DATETIME,DIFFTIME_S";

/// Identification of the observation the solver ran for.
#[derive(Debug, Clone, Serialize)]
pub struct ObservationLabel {
    /// Target/object name as recorded by the observation.
    pub object: String,
    /// Photometric filter identifier.
    pub filter: String,
}

impl ObservationLabel {
    pub fn new(object: impl Into<String>, filter: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            filter: filter.into(),
        }
    }
}

/// One output record: observation label plus the solved crossing, if any.
#[derive(Debug, Clone, Serialize)]
pub struct CrossingRecord {
    pub object: String,
    pub filter: String,
    /// UTC crossing time, RFC 3339 with millisecond precision.
    pub crossing_utc: Option<String>,
    /// Signed crossing - reference difference in seconds.
    pub diff_seconds: Option<f64>,
}

impl CrossingRecord {
    /// Build the record for a solution.
    pub fn from_solution(label: &ObservationLabel, solution: &CrossingSolution) -> Self {
        let (crossing_utc, diff_seconds) = match solution.best {
            Some(candidate) => (
                Some(
                    candidate
                        .time
                        .to_datetime()
                        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                        .to_string(),
                ),
                Some(candidate.diff_seconds),
            ),
            None => (None, None),
        };
        Self {
            object: label.object.clone(),
            filter: label.filter.clone(),
            crossing_utc,
            diff_seconds,
        }
    }

    /// Format as a CSV row matching [`CSV_HEADER`].
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{}",
            self.object,
            self.filter,
            self.crossing_utc.as_deref().unwrap_or(""),
            self.diff_seconds
                .map(|d| format!("{d:.3}"))
                .unwrap_or_default(),
        )
    }
}
