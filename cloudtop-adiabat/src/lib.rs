//! Non-iterative moist-adiabat surrogate for convective cloud top pressure.
//!
//! The "BT-parcel" method locates a convective cloud top at the pressure
//! where the satellite infrared brightness temperature (BT) intersects the
//! moist adiabat of the feeding parcel. Instead of integrating the adiabat
//! step by step, this crate evaluates a nested polynomial fit: the adiabat
//! is a polynomial in temperature whose coefficients are themselves
//! polynomials in the parcel's wet-bulb potential temperature θw,
//!
//! ```text
//! p(t, θw) = Σᵢ Cᵢ(θw) · tⁱ,    Cᵢ(θw) = Σⱼ a[i][j] · θwʲ
//! ```
//!
//! so one cloud top costs two Horner evaluations rather than an iterative
//! thermodynamic solve. Two fits are available as [`ModelVariant`]s:
//! [`Fast`](ModelVariant::Fast) (5th-degree adiabat, ≈28 m worst-case
//! altitude error) and [`Precise`](ModelVariant::Precise) (6th-degree,
//! ≈7.5 m), both valid for BT in [−75, −15] °C.
//!
//! The surrogate never rejects an out-of-domain input: extrapolated values
//! are numerically well defined, just untrustworthy, and pixel-grid callers
//! cannot afford per-pixel unwinding. Domain violations are therefore
//! reported as data via [`DomainCheck`], while non-finite inputs and
//! malformed coefficient tables fail fast as errors.
//!
//! # Example
//!
//! ```
//! use cloudtop_adiabat::{ModelVariant, MoistAdiabat};
//! use uom::si::{
//!     f64::ThermodynamicTemperature, pressure::hectopascal,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let model = MoistAdiabat::new(ModelVariant::Precise);
//! let top = model
//!     .cloud_top(
//!         ThermodynamicTemperature::new::<degree_celsius>(-50.0),
//!         ThermodynamicTemperature::new::<degree_celsius>(14.0),
//!     )
//!     .unwrap();
//!
//! assert!(top.domain.is_in_range());
//! assert!((top.pressure.get::<hectopascal>() - 300.6).abs() < 0.1);
//! ```

mod domain;
mod error;
mod model;
mod table;
mod variant;

pub use domain::{DomainCheck, FitDomain};
pub use error::{EvaluateError, TableError};
pub use model::{CloudTop, MoistAdiabat};
pub use table::{CoefficientTable, THETA_W_TERMS};
pub use variant::ModelVariant;
