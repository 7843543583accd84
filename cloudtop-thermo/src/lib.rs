//! Parcel thermodynamics and standard atmosphere support for cloud top
//! estimation.
//!
//! The moist-adiabat surrogate in `cloudtop-adiabat` consumes a single
//! wet-bulb potential temperature (θw) scalar and emits a pressure. This
//! crate supplies everything around that core:
//!
//! - [`potential`] — equivalent potential temperature θe (Bolton 1980) and
//!   its inversion to θw (Davies-Jones 2008),
//! - [`parcel`] — selection of the most unstable parcel (maximum θe) from a
//!   neighborhood of sounding levels,
//! - [`atmosphere`] — ICAO standard atmosphere conversion from the resulting
//!   cloud top pressure to geometric altitude and flight level.
//!
//! All quantities cross the API as `uom` types; the empirical formulas
//! inside are fitted in °C and hPa and extract raw values at the boundary.

pub mod atmosphere;
pub mod moisture;
pub mod parcel;
pub mod potential;

mod error;

pub use error::ThermoError;
pub use parcel::SoundingLevel;
