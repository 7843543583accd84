use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::hectopascal,
    thermodynamic_temperature::degree_celsius,
};

use crate::{
    domain::{DomainCheck, FitDomain},
    error::{EvaluateError, TableError},
    table::{CoefficientTable, THETA_W_TERMS},
    variant::ModelVariant,
};

/// A cloud top pressure paired with its fit-domain classification.
///
/// This is the output contract toward downstream consumers: a single
/// pressure value plus a validity flag. Mapping the pressure to geometric
/// altitude is the caller's job (e.g. via a standard-atmosphere routine).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudTop {
    pub pressure: Pressure,
    pub domain: DomainCheck,
}

/// The nested-polynomial moist-adiabat surrogate.
///
/// Wraps a [`ModelVariant`] and its [`CoefficientTable`] behind one
/// parameterized evaluator, so both published fits share a single code path.
/// Evaluation is pure and allocation-free; a `MoistAdiabat` is `Copy` and
/// safe to share across threads, and independent pixel evaluations can run
/// fully in parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAdiabat {
    variant: ModelVariant,
    table: CoefficientTable,
}

impl MoistAdiabat {
    /// Creates the surrogate with the variant's built-in coefficient table.
    #[must_use]
    pub fn new(variant: ModelVariant) -> Self {
        Self {
            variant,
            table: CoefficientTable::for_variant(variant),
        }
    }

    /// Creates the surrogate with a custom coefficient table.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the rows do not form a valid table for
    /// the variant.
    pub fn with_table(
        variant: ModelVariant,
        rows: &'static [[f64; THETA_W_TERMS]],
    ) -> Result<Self, TableError> {
        Ok(Self {
            variant,
            table: CoefficientTable::new(rows, variant)?,
        })
    }

    #[must_use]
    pub const fn variant(&self) -> ModelVariant {
        self.variant
    }

    #[must_use]
    pub fn fit_domain(&self) -> FitDomain {
        self.variant.fit_domain()
    }

    /// Evaluates the adiabat coefficients `C₀ ..= C_degree` at a given θw.
    ///
    /// Each `Cᵢ(θw)` is a Horner evaluation of table row `i`; the returned
    /// sequence is ordered lowest power of `t` first. No domain restriction
    /// is enforced here, and identical inputs always produce bit-identical
    /// output (fixed operation order).
    #[must_use]
    pub fn curve_coefficients(&self, theta_w: ThermodynamicTemperature) -> Vec<f64> {
        let tw = theta_w.get::<degree_celsius>();
        self.table.rows().iter().map(|row| horner(row, tw)).collect()
    }

    /// Evaluates the surrogate `p(t, θw)` at a brightness temperature.
    ///
    /// This single call replaces the iterative adiabat solve: θw selects the
    /// adiabat coefficients, then Horner's method over `t` yields the
    /// pressure. The two stages are fused, so nothing is allocated. A result
    /// is returned for any finite input pair; accuracy degrades sharply
    /// outside the fit domain (see [`check_domain`](Self::check_domain)).
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::NonFiniteInput`] if either input is NaN or
    /// infinite.
    pub fn pressure(
        &self,
        brightness_temperature: ThermodynamicTemperature,
        theta_w: ThermodynamicTemperature,
    ) -> Result<Pressure, EvaluateError> {
        let t = finite("brightness_temperature", brightness_temperature)?;
        let tw = finite("theta_w", theta_w)?;

        let hpa = self
            .table
            .rows()
            .iter()
            .rev()
            .fold(0.0, |acc, row| acc * t + horner(row, tw));

        Ok(Pressure::new::<hectopascal>(hpa))
    }

    /// Classifies an input pair against the variant's fit domain.
    ///
    /// Advisory: callers feeding decision products (e.g. an aviation hazard
    /// layer) should check this before trusting a pressure, but the
    /// evaluator itself never refuses an out-of-domain input.
    #[must_use]
    pub fn check_domain(
        &self,
        brightness_temperature: ThermodynamicTemperature,
        theta_w: ThermodynamicTemperature,
    ) -> DomainCheck {
        self.fit_domain().check(brightness_temperature, theta_w)
    }

    /// Evaluates the surrogate and tags the result with its domain check.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluateError::NonFiniteInput`] if either input is NaN or
    /// infinite.
    pub fn cloud_top(
        &self,
        brightness_temperature: ThermodynamicTemperature,
        theta_w: ThermodynamicTemperature,
    ) -> Result<CloudTop, EvaluateError> {
        Ok(CloudTop {
            pressure: self.pressure(brightness_temperature, theta_w)?,
            domain: self.check_domain(brightness_temperature, theta_w),
        })
    }
}

/// Horner evaluation of a polynomial stored lowest-power-first.
fn horner(coefficients: &[f64; THETA_W_TERMS], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

fn finite(
    name: &'static str,
    temperature: ThermodynamicTemperature,
) -> Result<f64, EvaluateError> {
    let value = temperature.get::<degree_celsius>();
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvaluateError::NonFiniteInput { name, value })
    }
}
