//! Error types for the crossing-time engine.
//!
//! "Target never reaches the requested altitude" is deliberately not here:
//! that is a normal solver outcome, reported as an empty result.

/// Result type for crossing-time operations.
pub type Result<T> = std::result::Result<T, TctError>;

/// Error type for crossing-time operations.
#[derive(Debug, thiserror::Error)]
pub enum TctError {
    /// Observer site or target coordinates outside their physical range.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed input value (e.g. a timestamp string).
    #[error("Parse error: {0}")]
    Parse(String),
}
