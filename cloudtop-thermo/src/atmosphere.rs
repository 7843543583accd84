//! ICAO standard atmosphere conversion from pressure to altitude.
//!
//! Downstream consumers of a cloud top pressure usually want a geometric
//! altitude or a flight level; this module provides the standard-atmosphere
//! mapping for both.

use uom::si::{
    f64::{Length, Pressure},
    length::{foot, meter},
    pressure::hectopascal,
};

/// Universal gas constant over the molar mass of air, J/(kg·K).
const R_AIR: f64 = 8.31432 / 0.0289644;
/// Dry air gas constant, J/(kg·K).
const RD: f64 = 287.0;
/// Standard gravity, m/s².
const G: f64 = 9.80665;
/// Tropospheric lapse rate, K/m.
const LAPSE_RATE: f64 = 0.0065;
/// Sea level standard temperature, K.
const T_SEA_LEVEL: f64 = 288.15;
/// Sea level standard pressure, hPa.
const P_SEA_LEVEL: f64 = 1013.25;
/// Pressure at the 11 km tropopause, hPa.
const P_TROPOPAUSE: f64 = 226.32;
/// Temperature in the isothermal layer above the tropopause, K.
const T_TROPOPAUSE: f64 = 273.15 - 56.5;

/// Altitude of a pressure level in the ICAO standard atmosphere.
///
/// Uses the tropospheric lapse-rate branch up to the 226.32 hPa tropopause
/// and the isothermal log branch above it.
#[must_use]
pub fn altitude(pressure: Pressure) -> Length {
    let p = pressure.get::<hectopascal>();
    let h = if p <= P_TROPOPAUSE {
        11_000.0 - RD * T_TROPOPAUSE / G * (p / P_TROPOPAUSE).ln()
    } else {
        T_SEA_LEVEL / LAPSE_RATE * (1.0 - (p / P_SEA_LEVEL).powf(R_AIR * LAPSE_RATE / G))
    };
    Length::new::<meter>(h)
}

/// Flight level (hundreds of feet in the standard atmosphere) of a pressure.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn flight_level(pressure: Pressure) -> i32 {
    (altitude(pressure).get::<foot>() / 100.0).round() as i32
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn hpa(value: f64) -> Pressure {
        Pressure::new::<hectopascal>(value)
    }

    #[test]
    fn sea_level_pressure_maps_to_zero() {
        assert_relative_eq!(altitude(hpa(1013.25)).get::<meter>(), 0.0);
    }

    #[test]
    fn tropopause_pressure_maps_to_eleven_kilometers() {
        assert_relative_eq!(altitude(hpa(226.32)).get::<meter>(), 11_000.0);
    }

    // Heights pinned from the ICAO formulas at test-authoring time.
    #[test]
    fn matches_pinned_heights() {
        let cases = [
            (850.0, 1457.3004602021406),
            (700.0, 3012.1825532404655),
            (500.0, 5574.43747451471),
            (300.0, 9163.956907152455),
            (200.0, 11783.885765401494),
            (150.0, 13607.918857848626),
            (100.0, 16178.749110560706),
        ];

        for (p, expected) in cases {
            assert_relative_eq!(altitude(hpa(p)).get::<meter>(), expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn altitude_decreases_with_pressure() {
        let mut previous = altitude(hpa(1013.25));
        for p in [900.0, 700.0, 500.0, 300.0, 226.32, 150.0, 100.0] {
            let h = altitude(hpa(p));
            assert!(h > previous);
            previous = h;
        }
    }

    #[test]
    fn flight_level_rounds_to_hundreds_of_feet() {
        // 300 hPa ≈ 9163.96 m ≈ 30065 ft.
        assert_eq!(flight_level(hpa(300.0)), 301);
        assert_eq!(flight_level(hpa(1013.25)), 0);
    }
}
