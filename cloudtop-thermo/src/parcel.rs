//! Most-unstable-parcel selection over a neighborhood of sounding levels.
//!
//! The cloud top estimate is sensitive to the starting temperature and
//! dewpoint, so rather than trusting a single surface point, callers scan a
//! neighborhood (typically 30–40 km around the target pixel, surface to
//! 700 hPa for elevated convection) and feed the surrogate the parcel with
//! the maximum equivalent potential temperature.

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::{ThermoError, potential::equivalent_potential_temperature};

/// One temperature/dewpoint/pressure triple from a sounding or model field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundingLevel {
    pub temperature: ThermodynamicTemperature,
    pub dewpoint: ThermodynamicTemperature,
    pub pressure: Pressure,
}

/// Returns the level with the maximum θe, or `None` for an empty slice.
///
/// # Errors
///
/// Returns [`ThermoError::NonFiniteInput`] if any level contains a NaN or
/// infinite field.
pub fn most_unstable_level(
    levels: &[SoundingLevel],
) -> Result<Option<&SoundingLevel>, ThermoError> {
    let mut best: Option<(&SoundingLevel, f64)> = None;

    for level in levels {
        let theta_e = equivalent_potential_temperature(level)?.value;
        match best {
            Some((_, max)) if theta_e <= max => {}
            _ => best = Some((level, theta_e)),
        }
    }

    Ok(best.map(|(level, _)| level))
}

/// Like [`most_unstable_level`], restricted to levels at or below a pressure
/// floor (e.g. 700 hPa to cover elevated convection without reaching into
/// the mid-troposphere).
///
/// # Errors
///
/// Returns [`ThermoError::NonFiniteInput`] if a candidate level contains a
/// NaN or infinite field.
pub fn most_unstable_in_layer(
    levels: &[SoundingLevel],
    floor: Pressure,
) -> Result<Option<&SoundingLevel>, ThermoError> {
    let mut best: Option<(&SoundingLevel, f64)> = None;

    for level in levels.iter().filter(|l| l.pressure >= floor) {
        let theta_e = equivalent_potential_temperature(level)?.value;
        match best {
            Some((_, max)) if theta_e <= max => {}
            _ => best = Some((level, theta_e)),
        }
    }

    Ok(best.map(|(level, _)| level))
}

/// The maximum θe over the levels, for callers that feed the surrogate from
/// a θe field directly without caring where the maximum sits.
///
/// # Errors
///
/// Returns [`ThermoError::NonFiniteInput`] if any level contains a NaN or
/// infinite field.
pub fn max_theta_e(
    levels: &[SoundingLevel],
) -> Result<Option<ThermodynamicTemperature>, ThermoError> {
    Ok(match most_unstable_level(levels)? {
        Some(level) => Some(equivalent_potential_temperature(level)?),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        pressure::hectopascal,
        thermodynamic_temperature::{degree_celsius, kelvin},
    };

    use super::*;

    fn level(t: f64, td: f64, p: f64) -> SoundingLevel {
        SoundingLevel {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(t),
            dewpoint: ThermodynamicTemperature::new::<degree_celsius>(td),
            pressure: Pressure::new::<hectopascal>(p),
        }
    }

    fn sample_levels() -> Vec<SoundingLevel> {
        vec![
            level(25.0, 20.0, 1000.0),
            level(24.0, 21.0, 1000.0),
            level(18.0, 16.0, 925.0),
            level(14.0, 12.0, 850.0),
            level(8.0, 2.0, 700.0),
        ]
    }

    #[test]
    fn picks_max_theta_e_not_warmest() {
        let levels = sample_levels();
        let best = most_unstable_level(&levels).unwrap().unwrap();

        // The moister 24 °C / 21 °C parcel beats the warmer 25 °C one.
        assert_eq!(*best, levels[1]);
    }

    #[test]
    fn max_theta_e_matches_pinned_value() {
        let levels = sample_levels();
        let theta_e = max_theta_e(&levels).unwrap().unwrap();
        assert_relative_eq!(
            theta_e.get::<kelvin>(),
            343.18405697519137,
            max_relative = 1e-12
        );
    }

    #[test]
    fn layer_restriction_excludes_levels_above_floor() {
        let mut levels = sample_levels();
        // An (unphysical) extremely unstable level above the floor.
        levels.push(level(20.0, 19.0, 500.0));

        let floor = Pressure::new::<hectopascal>(700.0);
        let best = most_unstable_in_layer(&levels, floor).unwrap().unwrap();
        assert_eq!(*best, levels[1]);
    }

    #[test]
    fn empty_slice_yields_none() {
        assert_eq!(most_unstable_level(&[]).unwrap(), None);
        assert_eq!(max_theta_e(&[]).unwrap(), None);
    }

    #[test]
    fn non_finite_level_is_an_error() {
        let mut levels = sample_levels();
        levels[2].temperature = ThermodynamicTemperature::new::<kelvin>(f64::INFINITY);

        assert!(most_unstable_level(&levels).is_err());
    }
}
