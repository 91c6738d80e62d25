//! ASOS one-minute data request URLs
//!
//! Builds request URLs for the Iowa Environmental Mesonet one-minute ASOS
//! download service. Timestamps are always requested in UTC, matching the
//! clock that supplies the default window. Sending the request is left to
//! the caller.

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::clock::{Clock, SystemClock};
use crate::error::MeteogramError;

/// ASOS request configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsosConfig {
    /// Download endpoint (default: <https://mesonet.agron.iastate.edu/request/asos/1min_dl.php>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Variables to request, in order (default: tmpf, dwpf, sknt, drct)
    #[serde(default = "default_variables")]
    pub variables: Vec<String>,

    /// Length of the default request window in hours (default: 24)
    #[serde(default = "default_lookback_hours")]
    pub default_lookback_hours: u32,

    /// Sampling interval (default: 1min)
    #[serde(default = "default_sample")]
    pub sample: String,
}

fn default_base_url() -> String {
    "https://mesonet.agron.iastate.edu/request/asos/1min_dl.php".to_string()
}

fn default_variables() -> Vec<String> {
    ["tmpf", "dwpf", "sknt", "drct"]
        .into_iter()
        .map(String::from)
        .collect()
}

const fn default_lookback_hours() -> u32 {
    24
}

fn default_sample() -> String {
    "1min".to_string()
}

impl AsosConfig {
    /// Longest accepted default window, ten years of hours
    pub const MAX_LOOKBACK_HOURS: u32 = 24 * 366 * 10;

    /// Check the default window length
    ///
    /// # Errors
    ///
    /// Returns `InvalidLookback` if `default_lookback_hours` is zero or
    /// exceeds [`Self::MAX_LOOKBACK_HOURS`].
    pub fn validate(&self) -> Result<(), MeteogramError> {
        if !(1..=Self::MAX_LOOKBACK_HOURS).contains(&self.default_lookback_hours) {
            return Err(MeteogramError::InvalidLookback(self.default_lookback_hours));
        }
        Ok(())
    }
}

impl Default for AsosConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            variables: default_variables(),
            default_lookback_hours: default_lookback_hours(),
            sample: default_sample(),
        }
    }
}

/// Builder for ASOS request URLs
///
/// Missing start or end dates are filled in from the clock: the end defaults
/// to now and the start to `default_lookback_hours` before the end.
#[derive(Debug, Clone)]
pub struct AsosRequestBuilder<C = SystemClock> {
    config: AsosConfig,
    clock: C,
}

impl AsosRequestBuilder<SystemClock> {
    /// Create a builder using the system clock
    #[must_use]
    pub const fn new(config: AsosConfig) -> Self {
        Self {
            config,
            clock: SystemClock,
        }
    }

    /// Create a builder with default configuration and the system clock
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(AsosConfig::default())
    }
}

impl<C: Clock> AsosRequestBuilder<C> {
    /// Create a builder with an explicit time source
    pub const fn with_clock(config: AsosConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Configuration in use
    pub const fn config(&self) -> &AsosConfig {
        &self.config
    }

    /// Resolve the request window, filling in defaults
    ///
    /// # Errors
    ///
    /// Returns `InvalidTimeRange` if the resolved start is not before the end
    /// or cannot be computed, and `FutureRange` if the start is after now.
    pub fn resolve_range(
        &self,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Result<(NaiveDateTime, NaiveDateTime), MeteogramError> {
        let now = self.clock.now().naive_utc();
        let end = end.unwrap_or(now);
        let start = match start {
            Some(start) => start,
            None => self.default_start(end)?,
        };

        if start >= end {
            return Err(MeteogramError::invalid_range(start, end));
        }
        if start > now {
            return Err(MeteogramError::FutureRange {
                start: start.to_string(),
                now: now.to_string(),
            });
        }
        Ok((start, end))
    }

    fn default_start(&self, end: NaiveDateTime) -> Result<NaiveDateTime, MeteogramError> {
        let hours = self.config.default_lookback_hours;
        TimeDelta::try_hours(i64::from(hours))
            .and_then(|lookback| end.checked_sub_signed(lookback))
            .ok_or_else(|| MeteogramError::invalid_range(format!("{end} - {hours}h"), end))
    }

    /// Build the request URL for `station` between `start` and `end`
    ///
    /// # Errors
    ///
    /// Returns `InvalidStation` if the station identifier is empty or not
    /// ASCII alphanumeric, `InvalidTimeRange` if the start is not before the
    /// end, and `FutureRange` if the start is after now.
    #[instrument(skip(self))]
    pub fn build_url(
        &self,
        station: &str,
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Result<String, MeteogramError> {
        Self::validate_station(station)?;
        let (start, end) = self.resolve_range(start, end)?;

        let mut url = format!(
            "{}?station%5B%5D={}&tz=UTC&{}&{}",
            self.config.base_url,
            station,
            Self::format_datetime(&start, 1),
            Self::format_datetime(&end, 2),
        );
        for variable in &self.config.variables {
            url.push_str(&format!("&vars%5B%5D={variable}"));
        }
        url.push_str(&format!(
            "&sample={}&what=view&delim=comma&gis=yes",
            self.config.sample
        ));

        debug!(url = %url, "Built ASOS request URL");
        Ok(url)
    }

    fn validate_station(station: &str) -> Result<(), MeteogramError> {
        if station.is_empty() || !station.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MeteogramError::InvalidStation(station.to_string()));
        }
        Ok(())
    }

    /// Date-time query fields with the given suffix (1 = start, 2 = end)
    fn format_datetime(dt: &NaiveDateTime, suffix: u8) -> String {
        format!(
            "year{suffix}={}&month{suffix}={:02}&day{suffix}={:02}&hour{suffix}={:02}&minute{suffix}={:02}",
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
        )
    }
}
