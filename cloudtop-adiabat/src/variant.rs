use uom::si::{
    f64::{Length, ThermodynamicTemperature},
    length::meter,
    thermodynamic_temperature::degree_celsius,
};

use crate::{domain::FitDomain, table::CoefficientTable};

/// Selects one of the two published polynomial fits.
///
/// The variants share the same evaluator logic; only the adiabat degree and
/// the coefficient table differ. Choosing a variant is a pure configuration
/// decision made once before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelVariant {
    /// 5th-degree adiabat polynomial, 30 coefficients, ≈28 m worst-case
    /// altitude error over the fit domain.
    Fast,
    /// 6th-degree adiabat polynomial, 35 coefficients, ≈7.5 m worst-case
    /// altitude error over the fit domain.
    Precise,
}

impl ModelVariant {
    /// Degree of the adiabat polynomial `p(t)`.
    #[must_use]
    pub const fn curve_degree(self) -> usize {
        match self {
            Self::Fast => 5,
            Self::Precise => 6,
        }
    }

    /// Degree of the θw polynomial behind each adiabat coefficient.
    ///
    /// Both published fits model the θw dependency with 4th-degree
    /// polynomials.
    #[must_use]
    pub const fn theta_w_degree(self) -> usize {
        4
    }

    /// Worst-case altitude error of the fit, relative to the iterative
    /// moist-adiabat calculation it replaces.
    #[must_use]
    pub fn max_altitude_error(self) -> Length {
        Length::new::<meter>(match self {
            Self::Fast => 28.0,
            Self::Precise => 7.5,
        })
    }

    /// The `(BT, θw)` region the fit was regressed over.
    ///
    /// Accuracy guarantees hold only inside this domain; see
    /// [`FitDomain::check`](crate::FitDomain::check).
    #[must_use]
    pub fn fit_domain(self) -> FitDomain {
        // Both fits were regressed over the usual range of deep convective
        // cloud top temperatures and mid-latitude parcel θw values.
        FitDomain {
            brightness_temperature: ThermodynamicTemperature::new::<degree_celsius>(-75.0)
                ..=ThermodynamicTemperature::new::<degree_celsius>(-15.0),
            theta_w: ThermodynamicTemperature::new::<degree_celsius>(0.0)
                ..=ThermodynamicTemperature::new::<degree_celsius>(30.0),
        }
    }

    /// The built-in coefficient table for this variant.
    #[must_use]
    pub fn table(self) -> CoefficientTable {
        CoefficientTable::for_variant(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_match_published_fits() {
        assert_eq!(ModelVariant::Fast.curve_degree(), 5);
        assert_eq!(ModelVariant::Precise.curve_degree(), 6);
        assert_eq!(ModelVariant::Fast.theta_w_degree(), 4);
        assert_eq!(ModelVariant::Precise.theta_w_degree(), 4);
    }

    #[test]
    fn precise_error_bound_is_tighter() {
        assert!(
            ModelVariant::Precise.max_altitude_error() < ModelVariant::Fast.max_altitude_error()
        );
    }
}
