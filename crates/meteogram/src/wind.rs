//! Wind vector components
//!
//! Meteorological convention: direction is where the wind blows *from*,
//! measured clockwise from north. `u` is the eastward component and `v` the
//! northward component, so a north wind has negative `v`.

use serde::{Deserialize, Serialize};

use crate::error::MeteogramError;

/// Eastward (`u`) and northward (`v`) wind components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindComponents {
    pub u: f64,
    pub v: f64,
}

impl WindComponents {
    /// Wind speed recovered from the components
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.u.hypot(self.v)
    }
}

/// Compute wind components from speed and direction in degrees
#[must_use]
pub fn wind_components(speed: f64, direction_deg: f64) -> WindComponents {
    let direction = direction_deg.to_radians();
    WindComponents {
        u: -speed * direction.sin(),
        v: -speed * direction.cos(),
    }
}

/// Elementwise [`wind_components`] over paired speed and direction series
///
/// # Errors
///
/// Returns `LengthMismatch` if the series have different lengths.
pub fn wind_components_series(
    speeds: &[f64],
    directions_deg: &[f64],
) -> Result<Vec<WindComponents>, MeteogramError> {
    if speeds.len() != directions_deg.len() {
        return Err(MeteogramError::LengthMismatch {
            left: speeds.len(),
            right: directions_deg.len(),
        });
    }

    Ok(speeds
        .iter()
        .zip(directions_deg)
        .map(|(&speed, &direction)| wind_components(speed, direction))
        .collect())
}
