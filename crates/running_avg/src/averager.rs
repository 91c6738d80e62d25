//! Trailing-window averager
//!
//! # Examples
//!
//! ```
//! use running_avg::Averager;
//!
//! let mut avg = Averager::new(3).expect("valid window size");
//! avg.add(5.0);
//! avg.add(7.0);
//! assert_eq!(avg.mean(), Ok(6.0));
//!
//! avg.add(9.0);
//! avg.add(11.0);
//! assert_eq!(avg.to_vec(), vec![7.0, 9.0, 11.0]);
//! assert_eq!(avg.mean(), Ok(9.0));
//! ```

use std::collections::VecDeque;

use tracing::trace;

use crate::config::AveragerConfig;
use crate::errors::{AveragerError, EmptyOperation};

/// Running average over the last `window_size` observations
///
/// Observations are held oldest first. Adding to a full window evicts the
/// oldest observation, so the window never holds more than `window_size`
/// values.
#[derive(Debug, Clone, PartialEq)]
pub struct Averager {
    data: VecDeque<f64>,
    window_size: usize,
}

impl Averager {
    /// Window size used by [`Averager::default`]
    pub const DEFAULT_WINDOW_SIZE: usize = 3;

    /// Create an empty averager over the last `window_size` observations
    ///
    /// # Errors
    ///
    /// Returns `InvalidWindowSize` if `window_size` is zero.
    pub fn new(window_size: usize) -> Result<Self, AveragerError> {
        if window_size == 0 {
            return Err(AveragerError::InvalidWindowSize(window_size));
        }
        Ok(Self {
            data: VecDeque::with_capacity(window_size),
            window_size,
        })
    }

    /// Create an averager from configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidWindowSize` if the configured window size is zero.
    pub fn from_config(config: &AveragerConfig) -> Result<Self, AveragerError> {
        Self::new(config.window_size)
    }

    /// Add the most recent observation
    ///
    /// If the window was already full, the oldest observation is dropped.
    pub fn add(&mut self, value: f64) {
        if self.is_full() {
            let evicted = self.data.pop_front();
            trace!(?evicted, window_size = self.window_size, "Window full, evicted oldest");
        }
        self.data.push_back(value);
    }

    /// Remove and return the oldest observation
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if no observations are held.
    pub fn evict_oldest(&mut self) -> Result<f64, AveragerError> {
        self.data
            .pop_front()
            .ok_or_else(|| AveragerError::empty(EmptyOperation::Evict))
    }

    /// Arithmetic mean of the held observations
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if no observations are held.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Result<f64, AveragerError> {
        if self.data.is_empty() {
            return Err(AveragerError::empty(EmptyOperation::Average));
        }
        let sum: f64 = self.data.iter().sum();
        Ok(sum / self.data.len() as f64)
    }

    /// Number of observations currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the window holds `window_size` observations
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.data.len() == self.window_size
    }

    /// Maximum number of observations held
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Iterate over held observations, oldest first
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }

    /// Copy of the held observations, oldest first
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Drop all observations, keeping the window size
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl Default for Averager {
    fn default() -> Self {
        Self {
            data: VecDeque::with_capacity(Self::DEFAULT_WINDOW_SIZE),
            window_size: Self::DEFAULT_WINDOW_SIZE,
        }
    }
}

impl<'a> IntoIterator for &'a Averager {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::collections::vec_deque::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter().copied()
    }
}

impl Extend<f64> for Averager {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
