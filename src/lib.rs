//! # TCT Rust — Telescope Crossing Time
//!
//! Numerical engine for answering one question: at which exact UTC instant
//! does a celestial target (RA/Dec) cross a given altitude above the horizon,
//! as seen from a fixed observer site, and how far is that instant from a
//! reference observation timestamp?
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Core value types — Modified Julian Date, observer site,
//!   equatorial target coordinates
//! - [`astro`]: Sidereal time and the equatorial → horizontal transform
//! - [`services`]: The crossing-time grid search, the three-window candidate
//!   selector, and the output record formatting
//! - [`config`]: Observer site configuration loaded from TOML files
//!
//! ## Design
//!
//! The solver is a pure function from inputs to result: no caching, no shared
//! state, and every invocation is independent, so batch callers can fan out
//! across targets freely. A target that never reaches the requested altitude
//! is a normal outcome (`best: None`), not an error; only malformed site or
//! target coordinates fail fast.

pub mod astro;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{Result, TctError};
pub use models::{EquatorialCoord, ModifiedJulianDate, ObserverSite};
pub use services::{
    solve, CrossingCandidate, CrossingRecord, CrossingSolution, Direction, ObservationLabel,
    SearchWindow,
};
