//! Running average over a bounded trailing window
//!
//! Keeps the most recent `N` observations and reports their arithmetic mean.
//! Until `N` observations have been seen, the mean covers whatever has been
//! added so far.

mod averager;
mod config;
pub mod errors;

pub use averager::Averager;
pub use config::AveragerConfig;
pub use errors::{AveragerError, EmptyOperation};
