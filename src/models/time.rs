use serde::*;

/// Modified Julian Date representation.
/// MJD 0 = 1858-11-17 00:00:00 UTC
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ModifiedJulianDate(f64);

impl ModifiedJulianDate {
    /// Create a new MJD value.
    pub fn new(v: f64) -> Self {
        Self(v)
    }

    /// Raw MJD value as f64 days.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Convert to Julian Date (JD = MJD + 2400000.5).
    pub fn to_julian_date(&self) -> f64 {
        self.0 + 2_400_000.5
    }

    /// Convert to Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn to_unix_timestamp(&self) -> f64 {
        (self.0 - 40587.0) * 86400.0
    }

    /// Create from Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn from_unix_timestamp(timestamp: f64) -> Self {
        Self::new(timestamp / 86400.0 + 40587.0)
    }

    /// Convert to chrono DateTime<Utc>.
    pub fn to_datetime(&self) -> chrono::DateTime<chrono::Utc> {
        let secs = self.to_unix_timestamp();
        let secs_i64 = secs.floor() as i64;
        let nanos = ((secs - secs.floor()) * 1e9).round() as u32;
        chrono::DateTime::from_timestamp(secs_i64, nanos.min(999_999_999))
            .unwrap_or(chrono::DateTime::UNIX_EPOCH)
    }

    /// Create from chrono DateTime<Utc>.
    pub fn from_datetime(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Self::from_unix_timestamp(dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9)
    }

    /// Shift this instant by a signed number of seconds.
    pub fn add_seconds(&self, seconds: f64) -> Self {
        Self::new(self.0 + seconds / 86400.0)
    }

    /// Signed difference `self - other` in seconds.
    pub fn diff_seconds(&self, other: ModifiedJulianDate) -> f64 {
        (self.0 - other.0) * 86400.0
    }
}

impl From<f64> for ModifiedJulianDate {
    fn from(v: f64) -> Self {
        ModifiedJulianDate::new(v)
    }
}
