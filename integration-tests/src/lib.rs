//! Shared support for the cross-crate tests.
//!
//! Holds the independent step-wise moist-adiabat integrator the surrogate is
//! validated against. It lives in `src/` rather than a test file so every
//! test target can use it.

pub mod reference;
