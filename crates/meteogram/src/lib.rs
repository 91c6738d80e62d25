//! Meteogram utilities
//!
//! Helpers for working with one-minute ASOS station observations from the
//! Iowa Environmental Mesonet (<https://mesonet.agron.iastate.edu>):
//! request URL construction, unit conversions, wind components,
//! potential temperature and running smoothing of observation series.

pub mod asos;
pub mod clock;
pub mod config;
mod error;
pub mod observation;
pub mod telemetry;
pub mod thermo;
pub mod units;
pub mod wind;

pub use asos::{AsosConfig, AsosRequestBuilder};
pub use clock::{Clock, SystemClock, current_utc_time};
pub use self::config::MeteogramConfig;
pub use error::MeteogramError;
pub use observation::{Observation, ObservationSummary, smoothed_temperatures};
pub use thermo::{exner_function, potential_temperature};
pub use units::{deg_c_to_deg_f, deg_c_to_kelvin, deg_f_to_deg_c, knots_to_meters_per_second};
pub use wind::{WindComponents, wind_components, wind_components_series};
