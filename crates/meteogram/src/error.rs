//! Meteogram errors

use running_avg::AveragerError;
use thiserror::Error;

/// Errors that can occur in the meteogram helpers
#[derive(Debug, Error)]
pub enum MeteogramError {
    /// Station identifier is empty or contains unexpected characters
    #[error("Invalid station identifier: {0:?}")]
    InvalidStation(String),

    /// Requested start is not before the requested end
    #[error("Invalid time range: start {start} is not before end {end}")]
    InvalidTimeRange { start: String, end: String },

    /// Requested window starts after the current time
    #[error("Time range starts in the future: start {start} is after now {now}")]
    FutureRange { start: String, now: String },

    /// Default request window length is zero or too large
    #[error("Invalid lookback: {0} hours")]
    InvalidLookback(u32),

    /// Paired input series have different lengths
    #[error("Length mismatch: {left} speeds vs {right} directions")]
    LengthMismatch { left: usize, right: usize },

    /// Operation needs at least one observation
    #[error("Observation series is empty")]
    EmptySeries,

    /// Running average failure
    #[error(transparent)]
    Averager(#[from] AveragerError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl MeteogramError {
    /// Create an invalid time range error
    pub fn invalid_range(start: impl ToString, end: impl ToString) -> Self {
        Self::InvalidTimeRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_station_error_message() {
        let err = MeteogramError::InvalidStation("F$D".to_string());
        assert_eq!(err.to_string(), "Invalid station identifier: \"F$D\"");
    }

    #[test]
    fn invalid_range_creates_correct_error() {
        let err = MeteogramError::invalid_range("2018-03-26", "2018-03-25");
        match err {
            MeteogramError::InvalidTimeRange { start, end } => {
                assert_eq!(start, "2018-03-26");
                assert_eq!(end, "2018-03-25");
            },
            _ => unreachable!("Expected InvalidTimeRange error"),
        }
    }

    #[test]
    fn future_range_error_message() {
        let err = MeteogramError::FutureRange {
            start: "2999-10-10 10:00:00".to_string(),
            now: "2018-03-26 12:00:00".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Time range starts in the future: start 2999-10-10 10:00:00 is after now 2018-03-26 12:00:00"
        );
    }

    #[test]
    fn invalid_lookback_error_message() {
        let err = MeteogramError::InvalidLookback(0);
        assert_eq!(err.to_string(), "Invalid lookback: 0 hours");
    }

    #[test]
    fn length_mismatch_error_message() {
        let err = MeteogramError::LengthMismatch { left: 3, right: 2 };
        assert_eq!(err.to_string(), "Length mismatch: 3 speeds vs 2 directions");
    }

    #[test]
    fn averager_error_is_transparent() {
        let err = MeteogramError::from(AveragerError::InvalidWindowSize(0));
        assert_eq!(err.to_string(), "invalid window size: 0 (must be at least 1)");
    }
}
