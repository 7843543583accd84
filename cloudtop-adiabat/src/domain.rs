use std::ops::RangeInclusive;

use uom::si::f64::ThermodynamicTemperature;

/// Result of checking an input pair against a variant's fit domain.
///
/// Advisory only: the evaluator still returns a pressure for out-of-domain
/// inputs, but the published error bounds no longer apply. Callers decide
/// whether to discard, flag, or accept the degraded-confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainCheck {
    /// Both inputs fall inside the fit domain; error bounds apply.
    InRange,
    /// The brightness temperature lies outside the fitted range.
    TemperatureOutOfRange,
    /// θw lies outside the range used during the regression fit.
    ThetaWOutOfRange,
}

impl DomainCheck {
    #[must_use]
    pub const fn is_in_range(self) -> bool {
        matches!(self, Self::InRange)
    }
}

/// The `(BT, θw)` region a polynomial fit was regressed over.
#[derive(Debug, Clone, PartialEq)]
pub struct FitDomain {
    pub brightness_temperature: RangeInclusive<ThermodynamicTemperature>,
    pub theta_w: RangeInclusive<ThermodynamicTemperature>,
}

impl FitDomain {
    /// Classifies an input pair against this domain.
    ///
    /// If both inputs are out of range the brightness temperature flag wins,
    /// since BT violations are the common case for non-convective scenes.
    #[must_use]
    pub fn check(
        &self,
        brightness_temperature: ThermodynamicTemperature,
        theta_w: ThermodynamicTemperature,
    ) -> DomainCheck {
        if !self.brightness_temperature.contains(&brightness_temperature) {
            DomainCheck::TemperatureOutOfRange
        } else if !self.theta_w.contains(&theta_w) {
            DomainCheck::ThetaWOutOfRange
        } else {
            DomainCheck::InRange
        }
    }
}

#[cfg(test)]
mod tests {
    use uom::si::thermodynamic_temperature::degree_celsius;

    use crate::ModelVariant;

    use super::*;

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn classifies_brightness_temperature() {
        let domain = ModelVariant::Fast.fit_domain();

        assert_eq!(
            domain.check(celsius(-80.0), celsius(14.0)),
            DomainCheck::TemperatureOutOfRange
        );
        assert_eq!(
            domain.check(celsius(-40.0), celsius(14.0)),
            DomainCheck::InRange
        );
    }

    #[test]
    fn classifies_theta_w() {
        let domain = ModelVariant::Precise.fit_domain();

        assert_eq!(
            domain.check(celsius(-40.0), celsius(-5.0)),
            DomainCheck::ThetaWOutOfRange
        );
        assert_eq!(
            domain.check(celsius(-40.0), celsius(35.0)),
            DomainCheck::ThetaWOutOfRange
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let domain = ModelVariant::Fast.fit_domain();

        assert_eq!(
            domain.check(celsius(-75.0), celsius(0.0)),
            DomainCheck::InRange
        );
        assert_eq!(
            domain.check(celsius(-15.0), celsius(30.0)),
            DomainCheck::InRange
        );
    }

    #[test]
    fn temperature_flag_wins_when_both_out() {
        let domain = ModelVariant::Fast.fit_domain();

        assert_eq!(
            domain.check(celsius(-80.0), celsius(-5.0)),
            DomainCheck::TemperatureOutOfRange
        );
    }
}
