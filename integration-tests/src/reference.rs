//! A deliberately simple iterative pseudoadiabat solver.
//!
//! This is the computation the polynomial surrogate exists to avoid: a
//! step-wise RK4 integration of the saturated parcel's dT/dp from the
//! 1000 hPa anchor (where the parcel temperature equals θw by definition)
//! up to the level where it matches the observed brightness temperature.
//!
//! The formulation is intentionally plain — Bolton saturation vapor
//! pressure, constant latent heat, pseudoadiabatic (condensate removed) —
//! so it is an *independent* check on the fit, not a reproduction of the
//! regression's own reference. See DESIGN.md for the tolerance implications.

const ZERO_C_K: f64 = 273.15;
const RD: f64 = 287.0;
const CPD: f64 = 1005.7;
const LATENT_HEAT: f64 = 2.501e6;
const EPSILON: f64 = 0.6219569100577033;

/// Pressure step for the integration, hPa. Small enough that halving it
/// moves the result by far less than the tolerances asserted against it.
const DP: f64 = -0.02;

fn saturation_vapor_pressure(temperature_k: f64) -> f64 {
    let tc = temperature_k - ZERO_C_K;
    611.2 * ((17.67 * tc) / (tc + 243.5)).exp()
}

/// Pseudoadiabatic dT/dp in K per hPa.
fn lapse(pressure_hpa: f64, temperature_k: f64) -> f64 {
    let e = saturation_vapor_pressure(temperature_k);
    let r = EPSILON * e / (pressure_hpa * 100.0 - e);
    let numerator = RD * temperature_k + LATENT_HEAT * r;
    let denominator =
        CPD + (LATENT_HEAT * LATENT_HEAT * r * EPSILON) / (RD * temperature_k * temperature_k);
    (1.0 / (pressure_hpa * 100.0)) * (numerator / denominator) * 100.0
}

/// Integrates the moist adiabat for a given θw until the parcel temperature
/// falls to the brightness temperature, returning the crossing pressure in
/// hPa. Both inputs are in °C.
#[must_use]
pub fn moist_adiabat_pressure(theta_w: f64, brightness_temperature: f64) -> f64 {
    let target = brightness_temperature + ZERO_C_K;
    let mut pressure = 1000.0;
    let mut temperature = theta_w + ZERO_C_K;

    while temperature > target && pressure > 40.0 {
        let k1 = lapse(pressure, temperature);
        let k2 = lapse(pressure + DP / 2.0, temperature + DP / 2.0 * k1);
        let k3 = lapse(pressure + DP / 2.0, temperature + DP / 2.0 * k2);
        let k4 = lapse(pressure + DP, temperature + DP * k3);
        let next = temperature + DP / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4);

        if next <= target {
            // Linear interpolation across the crossing step.
            return pressure + (temperature - target) / (temperature - next) * DP;
        }
        temperature = next;
        pressure += DP;
    }

    pressure
}
