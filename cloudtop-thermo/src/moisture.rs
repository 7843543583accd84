//! Moisture quantities used by the parcel calculations.

use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

/// Ratio of the molecular weights of water vapor and dry air.
pub(crate) const EPSILON: f64 = 0.621_956_910_057_703_3;

/// Saturation vapor pressure from the Bolton equation.
///
/// `e_s = 611.2 · exp(17.67·Td / (Td + 243.5))` Pa, with the dewpoint in °C.
#[must_use]
pub fn saturation_vapor_pressure(dewpoint: ThermodynamicTemperature) -> Pressure {
    let td = dewpoint.get::<degree_celsius>();
    Pressure::new::<pascal>(611.2 * ((17.67 * td) / (td + 243.5)).exp())
}

/// Mixing ratio from vapor (partial) pressure and total pressure.
#[must_use]
pub fn mixing_ratio(vapor_pressure: Pressure, total_pressure: Pressure) -> Ratio {
    let e = vapor_pressure.get::<pascal>();
    let p = total_pressure.get::<pascal>();
    Ratio::new::<ratio>(EPSILON * e / (p - e))
}

/// Saturation mixing ratio from pressure and dewpoint (Hobbs 1977).
#[must_use]
pub fn saturation_mixing_ratio(
    pressure: Pressure,
    dewpoint: ThermodynamicTemperature,
) -> Ratio {
    mixing_ratio(saturation_vapor_pressure(dewpoint), pressure)
}
