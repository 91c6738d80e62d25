//! Unit conversions

/// Knots to meters per second
const KNOTS_TO_MPS: f64 = 0.514_444;

/// Zero Celsius in Kelvin
const ZERO_CELSIUS_K: f64 = 273.15;

/// Convert degrees Fahrenheit to degrees Celsius
#[must_use]
pub fn deg_f_to_deg_c(deg_f: f64) -> f64 {
    (deg_f - 32.0) * 5.0 / 9.0
}

/// Convert degrees Celsius to degrees Fahrenheit
#[must_use]
pub fn deg_c_to_deg_f(deg_c: f64) -> f64 {
    deg_c * 9.0 / 5.0 + 32.0
}

/// Convert degrees Celsius to Kelvin
#[must_use]
pub fn deg_c_to_kelvin(deg_c: f64) -> f64 {
    deg_c + ZERO_CELSIUS_K
}

/// Convert a speed in knots to meters per second
#[must_use]
pub fn knots_to_meters_per_second(knots: f64) -> f64 {
    knots * KNOTS_TO_MPS
}
