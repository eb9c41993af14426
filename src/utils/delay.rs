//! Randomized politeness delay applied before outbound fetches.

use rand::Rng;
use std::time::Duration;

/// A closed interval from which a pause is drawn uniformly at random.
///
/// Sampled with millisecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolitenessDelay {
    min: Duration,
    max: Duration,
}

impl PolitenessDelay {
    /// Creates a delay range. Bounds given in reverse order are swapped.
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Builds a delay range from millisecond bounds.
    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self::new(Duration::from_millis(min_ms), Duration::from_millis(max_ms))
    }

    /// A zero-length delay.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Draws a pause from the interval.
    pub fn sample(&self) -> Duration {
        let min_ms = self.min.as_millis() as u64;
        let max_ms = self.max.as_millis() as u64;

        if min_ms >= max_ms {
            return self.min;
        }

        Duration::from_millis(rand::rng().random_range(min_ms..=max_ms))
    }
}

impl Default for PolitenessDelay {
    fn default() -> Self {
        Self::from_millis(1_000, 3_000)
    }
}
