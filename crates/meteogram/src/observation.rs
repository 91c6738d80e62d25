//! Station observations
//!
//! Typed rows of one-minute ASOS data and quantities derived from them.

use chrono::NaiveDateTime;
use running_avg::Averager;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::MeteogramError;
use crate::units::deg_f_to_deg_c;
use crate::wind::{WindComponents, wind_components};

/// One station observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Station identifier (e.g. "AMW")
    pub station_id: String,
    /// Human-readable station name
    pub station_name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Observation time (UTC)
    #[serde(rename = "UTC")]
    pub utc: NaiveDateTime,
    #[serde(rename = "temperature_degF")]
    pub temperature_deg_f: f64,
    #[serde(rename = "dewpoint_degF")]
    pub dewpoint_deg_f: f64,
    pub wind_speed_knots: f64,
    /// Direction the wind blows from, clockwise from north
    pub wind_direction_degrees: f64,
}

impl Observation {
    /// Air temperature in Celsius
    #[must_use]
    pub fn temperature_deg_c(&self) -> f64 {
        deg_f_to_deg_c(self.temperature_deg_f)
    }

    /// Dewpoint in Celsius
    #[must_use]
    pub fn dewpoint_deg_c(&self) -> f64 {
        deg_f_to_deg_c(self.dewpoint_deg_f)
    }

    /// Wind components in knots
    #[must_use]
    pub fn wind(&self) -> WindComponents {
        wind_components(self.wind_speed_knots, self.wind_direction_degrees)
    }

    /// Dewpoint depression (temperature minus dewpoint) in Fahrenheit
    #[must_use]
    pub fn dewpoint_depression_deg_f(&self) -> f64 {
        self.temperature_deg_f - self.dewpoint_deg_f
    }
}

/// Running mean of temperature (Fahrenheit) after each observation
///
/// The first `window - 1` values average the observations seen so far.
///
/// # Errors
///
/// Returns an averager error if `window` is zero.
#[instrument(skip(observations), fields(count = observations.len()))]
pub fn smoothed_temperatures(
    observations: &[Observation],
    window: usize,
) -> Result<Vec<f64>, MeteogramError> {
    let mut averager = Averager::new(window)?;
    let mut smoothed = Vec::with_capacity(observations.len());

    for observation in observations {
        averager.add(observation.temperature_deg_f);
        smoothed.push(averager.mean()?);
    }

    debug!(window, "Smoothed temperature series");
    Ok(smoothed)
}

/// Summary statistics over an observation series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationSummary {
    pub count: usize,
    pub min_temperature_deg_f: f64,
    pub max_temperature_deg_f: f64,
    pub mean_temperature_deg_f: f64,
    pub mean_wind_speed_knots: f64,
}

impl ObservationSummary {
    /// Summarize a series of observations
    ///
    /// # Errors
    ///
    /// Returns `EmptySeries` if there are no observations.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_series(observations: &[Observation]) -> Result<Self, MeteogramError> {
        if observations.is_empty() {
            return Err(MeteogramError::EmptySeries);
        }

        let count = observations.len();
        let temperatures = observations.iter().map(|o| o.temperature_deg_f);

        Ok(Self {
            count,
            min_temperature_deg_f: temperatures.clone().fold(f64::INFINITY, f64::min),
            max_temperature_deg_f: temperatures.clone().fold(f64::NEG_INFINITY, f64::max),
            mean_temperature_deg_f: temperatures.sum::<f64>() / count as f64,
            mean_wind_speed_knots: observations
                .iter()
                .map(|o| o.wind_speed_knots)
                .sum::<f64>()
                / count as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn observation(minute: u32, temperature_f: f64, wind_knots: f64) -> Observation {
        Observation {
            station_id: "AMW".to_string(),
            station_name: "Ames".to_string(),
            latitude_deg: 41.990_439,
            longitude_deg: -93.618_515,
            utc: NaiveDate::from_ymd_opt(2018, 3, 25)
                .and_then(|d| d.and_hms_opt(12, minute, 0))
                .expect("valid datetime"),
            temperature_deg_f: temperature_f,
            dewpoint_deg_f: 24.0,
            wind_speed_knots: wind_knots,
            wind_direction_degrees: 113.0,
        }
    }

    #[test]
    fn test_derived_temperatures() {
        let obs = observation(0, 32.0, 8.0);
        assert!(obs.temperature_deg_c().abs() < f64::EPSILON);
        assert!((obs.dewpoint_deg_c() - (-40.0 / 9.0)).abs() < 1.0e-9);
        assert!((obs.dewpoint_depression_deg_f() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wind_uses_knots() {
        let obs = observation(0, 29.0, 8.0);
        assert!((obs.wind().speed() - 8.0).abs() < 1.0e-9);
    }

    #[test]
    fn test_smoothed_temperatures() {
        let series: Vec<_> = [5.0, 7.0, 9.0, 11.0]
            .into_iter()
            .enumerate()
            .map(|(i, t)| observation(u32::try_from(i).unwrap(), t, 0.0))
            .collect();

        let smoothed = smoothed_temperatures(&series, 3).unwrap();
        assert_eq!(smoothed, vec![5.0, 6.0, 7.0, 9.0]);
    }

    #[test]
    fn test_smoothed_temperatures_empty_series() {
        assert!(smoothed_temperatures(&[], 3).unwrap().is_empty());
    }

    #[test]
    fn test_smoothed_temperatures_zero_window() {
        let series = vec![observation(0, 29.0, 8.0)];
        assert!(matches!(
            smoothed_temperatures(&series, 0),
            Err(MeteogramError::Averager(_))
        ));
    }

    #[test]
    fn test_summary() {
        let series = vec![
            observation(0, 29.0, 8.0),
            observation(1, 31.0, 10.0),
            observation(2, 27.0, 6.0),
        ];

        let summary = ObservationSummary::from_series(&series).unwrap();
        assert_eq!(summary.count, 3);
        assert!((summary.min_temperature_deg_f - 27.0).abs() < f64::EPSILON);
        assert!((summary.max_temperature_deg_f - 31.0).abs() < f64::EPSILON);
        assert!((summary.mean_temperature_deg_f - 29.0).abs() < f64::EPSILON);
        assert!((summary.mean_wind_speed_knots - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_empty_series() {
        assert!(matches!(
            ObservationSummary::from_series(&[]),
            Err(MeteogramError::EmptySeries)
        ));
    }

    #[test]
    fn test_observation_field_names() {
        let json = serde_json::to_value(observation(0, 29.0, 8.0)).expect("serialize");
        assert_eq!(json["station_id"], "AMW");
        assert_eq!(json["UTC"], "2018-03-25T12:00:00");
        assert_eq!(json["temperature_degF"], 29.0);
        assert_eq!(json["wind_direction_degrees"], 113.0);
    }
}
