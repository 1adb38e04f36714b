//! Spherical-astronomy primitives.
//!
//! Only what the crossing solver needs: sidereal time and the equatorial →
//! horizontal transform. No ephemeris engine, no refraction model.

pub mod horizontal;
pub mod sidereal;

pub use horizontal::*;
