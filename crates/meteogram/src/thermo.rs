//! Thermodynamic quantities

/// Reference pressure for potential temperature in hPa
pub const REFERENCE_PRESSURE_HPA: f64 = 1000.0;

/// Dry-air gas constant over specific heat at constant pressure (Rd/cp)
pub const KAPPA: f64 = 0.2856;

/// Exner function `(p / p0)^(Rd/cp)` with `p0 = 1000 hPa`
#[must_use]
pub fn exner_function(pressure_hpa: f64) -> f64 {
    exner_function_with_reference(pressure_hpa, REFERENCE_PRESSURE_HPA)
}

/// Exner function against an explicit reference pressure
#[must_use]
pub fn exner_function_with_reference(pressure_hpa: f64, reference_hpa: f64) -> f64 {
    (pressure_hpa / reference_hpa).powf(KAPPA)
}

/// Potential temperature in Kelvin of air at `pressure_hpa` and `temperature_k`
///
/// The temperature a parcel would have if brought adiabatically to 1000 hPa.
#[must_use]
pub fn potential_temperature(pressure_hpa: f64, temperature_k: f64) -> f64 {
    temperature_k / exner_function(pressure_hpa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exner_function() {
        assert!((exner_function(500.0) - 0.820_383_3).abs() < 1.0e-4);
    }

    #[test]
    fn test_exner_function_at_reference_is_one() {
        assert!((exner_function(1000.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_exner_function_with_reference() {
        assert!((exner_function_with_reference(850.0, 850.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_potential_temperature() {
        assert!((potential_temperature(800.0, 273.0) - 290.96).abs() < 1.0e-2);
    }

    #[test]
    fn test_potential_temperature_at_reference_pressure() {
        assert!((potential_temperature(1000.0, 288.15) - 288.15).abs() < 1.0e-9);
    }

    #[test]
    fn test_potential_temperature_exceeds_temperature_aloft() {
        for pressure in [950.0, 700.0, 500.0, 250.0] {
            assert!(potential_temperature(pressure, 250.0) > 250.0);
        }
    }
}
