//! Potential temperature family: θ, θe (Bolton 1980), θw (Davies-Jones 2008).

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::hectopascal,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::{
    ThermoError,
    moisture::{saturation_mixing_ratio, saturation_vapor_pressure},
    parcel::SoundingLevel,
};

/// κ = Rd / cpd for dry air.
const KAPPA: f64 = 0.285_714_285_714_285_64;

/// Below this θe the Davies-Jones inversion is the identity (no moisture
/// correction remains).
const THETA_W_IDENTITY_BELOW: f64 = 173.15;

/// Dry potential temperature `θ = T · (1000 hPa / p)^κ`.
#[must_use]
pub fn potential_temperature(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    let t = temperature.get::<kelvin>();
    let p = pressure.get::<hectopascal>();
    ThermodynamicTemperature::new::<kelvin>(t * (1000.0 / p).powf(KAPPA))
}

/// Equivalent potential temperature θe from Bolton's 1980 approximation.
///
/// The dry potential temperature is taken at the partial pressure of dry air
/// `p − e`, and the lifting condensation level temperature comes from
/// Bolton's closed form `t_l = 56 + 1/(1/(Td−56) + ln(T/Td)/800)`.
///
/// # Errors
///
/// Returns [`ThermoError::NonFiniteInput`] if any level field is NaN or
/// infinite.
pub fn equivalent_potential_temperature(
    level: &SoundingLevel,
) -> Result<ThermodynamicTemperature, ThermoError> {
    let t = finite("temperature", level.temperature.get::<kelvin>())?;
    let td = finite("dewpoint", level.dewpoint.get::<kelvin>())?;
    finite("pressure", level.pressure.get::<hectopascal>())?;

    let r_s = saturation_mixing_ratio(level.pressure, level.dewpoint).get::<ratio>();
    let e = saturation_vapor_pressure(level.dewpoint);
    let theta = potential_temperature(level.pressure - e, level.temperature).get::<kelvin>();

    let t_l = 56.0 + 1.0 / (1.0 / (td - 56.0) + (t / td).ln() / 800.0);
    let theta_l = theta * (t / t_l).powf(0.28 * r_s);
    let theta_e = theta_l * (r_s * (1.0 + 0.448 * r_s) * (3036.0 / t_l - 1.78)).exp();

    Ok(ThermodynamicTemperature::new::<kelvin>(theta_e))
}

/// Wet-bulb potential temperature θw from θe, after Davies-Jones 2008.
///
/// A rational-polynomial fit in `x = θe / 273.15`; below 173.15 K the
/// correction vanishes and θw = θe.
#[must_use]
pub fn wet_bulb_from_equivalent(theta_e: ThermodynamicTemperature) -> ThermodynamicTemperature {
    let th_e = theta_e.get::<kelvin>();
    if th_e <= THETA_W_IDENTITY_BELOW {
        return theta_e;
    }

    let x = th_e / 273.15;
    let x2 = x * x;
    let x3 = x2 * x;
    let x4 = x3 * x;
    let a = 7.101574 - 20.68208 * x + 16.11182 * x2 + 2.574631 * x3 - 5.205688 * x4;
    let b = 1.0 - 3.552497 * x + 3.781782 * x2 - 0.6899655 * x3 - 0.5929340 * x4;

    ThermodynamicTemperature::new::<kelvin>(th_e - (a / b).exp())
}

/// Wet-bulb potential temperature θw of a sounding level.
///
/// This is the scalar the moist-adiabat surrogate consumes.
///
/// # Errors
///
/// Returns [`ThermoError::NonFiniteInput`] if any level field is NaN or
/// infinite.
pub fn wet_bulb_potential_temperature(
    level: &SoundingLevel,
) -> Result<ThermodynamicTemperature, ThermoError> {
    Ok(wet_bulb_from_equivalent(equivalent_potential_temperature(
        level,
    )?))
}

fn finite(name: &'static str, value: f64) -> Result<f64, ThermoError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ThermoError::NonFiniteInput { name, value })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    use super::*;

    fn level(t: f64, td: f64, p: f64) -> SoundingLevel {
        SoundingLevel {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(t),
            dewpoint: ThermodynamicTemperature::new::<degree_celsius>(td),
            pressure: Pressure::new::<hectopascal>(p),
        }
    }

    #[test]
    fn potential_temperature_at_reference_pressure_is_identity() {
        let t = ThermodynamicTemperature::new::<kelvin>(288.15);
        let theta = potential_temperature(Pressure::new::<hectopascal>(1000.0), t);
        assert_relative_eq!(theta.get::<kelvin>(), 288.15);
    }

    // Values pinned from the Bolton / Davies-Jones formulations at
    // test-authoring time.
    #[test]
    fn theta_e_matches_pinned_values() {
        let cases = [
            (level(25.0, 20.0, 1000.0), 341.5725959894848),
            (level(10.0, 2.0, 990.0), 296.68082166376087),
            (level(30.0, 24.0, 1013.25), 358.03023875998934),
            (level(-5.0, -8.0, 850.0), 288.02103579226133),
            (level(20.0, 18.0, 950.0), 337.6407902457372),
        ];

        for (lvl, expected) in cases {
            let theta_e = equivalent_potential_temperature(&lvl).unwrap();
            assert_relative_eq!(theta_e.get::<kelvin>(), expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn theta_w_matches_pinned_values() {
        let cases = [
            (level(25.0, 20.0, 1000.0), 294.63897526321966),
            (level(10.0, 2.0, 990.0), 279.7890329647771),
            (level(30.0, 24.0, 1013.25), 298.2446128840489),
            (level(-5.0, -8.0, 850.0), 275.5592605240773),
            (level(20.0, 18.0, 950.0), 293.67012558948437),
        ];

        for (lvl, expected) in cases {
            let theta_w = wet_bulb_potential_temperature(&lvl).unwrap();
            assert_relative_eq!(theta_w.get::<kelvin>(), expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn theta_w_is_identity_for_very_cold_theta_e() {
        let theta_e = ThermodynamicTemperature::new::<kelvin>(170.0);
        assert_eq!(wet_bulb_from_equivalent(theta_e), theta_e);
    }

    #[test]
    fn theta_w_never_exceeds_theta_e() {
        for th_e in [280.0, 300.0, 330.0, 360.0] {
            let theta_e = ThermodynamicTemperature::new::<kelvin>(th_e);
            assert!(wet_bulb_from_equivalent(theta_e) < theta_e);
        }
    }

    #[test]
    fn rejects_non_finite_level() {
        let mut lvl = level(25.0, 20.0, 1000.0);
        lvl.dewpoint = ThermodynamicTemperature::new::<kelvin>(f64::NAN);

        let result = equivalent_potential_temperature(&lvl);
        assert!(matches!(
            result,
            Err(ThermoError::NonFiniteInput { name: "dewpoint", .. })
        ));
    }
}
