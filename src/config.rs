// src/config.rs

//! Interval and configuration types for the antispam tracker

// dependencies
use crate::errors::AntiSpamError;
use std::time::Duration;

/// A single threshold: no more than `limit` events may fall inside any
/// trailing `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    window: Duration,
    limit: u32,
}

impl Interval {
    pub const fn new(window: Duration, limit: u32) -> Self {
        Self { window, limit }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    // window in nanoseconds, None if it does not fit the clock's unit
    pub(crate) fn window_nanos(&self) -> Option<u64> {
        u64::try_from(self.window.as_nanos()).ok()
    }
}

impl From<(Duration, u32)> for Interval {
    fn from((window, limit): (Duration, u32)) -> Self {
        Self::new(window, limit)
    }
}

/// The escalating set used when no intervals are supplied:
/// 3 per 5 seconds, 5 per minute, 10 per hour and 24 per day.
pub const DEFAULT_INTERVALS: [Interval; 4] = [
    Interval::new(Duration::from_secs(5), 3),
    Interval::new(Duration::from_secs(60), 5),
    Interval::new(Duration::from_secs(60 * 60), 10),
    Interval::new(Duration::from_secs(24 * 60 * 60), 24),
];

/// Configuration for tracker behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntiSpamConfig {
    pub(crate) intervals: Vec<Interval>,
}

impl AntiSpamConfig {
    /// Create a configuration from an explicit list of intervals
    pub fn new<I>(intervals: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Interval>,
    {
        Self {
            intervals: intervals.into_iter().map(Into::into).collect(),
        }
    }

    /// Start from no intervals, to be filled with `interval`
    pub fn empty() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Builder-style: append an interval
    pub fn interval(mut self, window: Duration, limit: u32) -> Self {
        self.intervals.push(Interval::new(window, limit));
        self
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AntiSpamError> {
        if self.intervals.is_empty() {
            return Err(AntiSpamError::NoIntervals);
        }
        for (index, interval) in self.intervals.iter().enumerate() {
            match interval.window_nanos() {
                Some(0) | None => return Err(AntiSpamError::InvalidWindow { index }),
                Some(_) => {}
            }
            if interval.limit == 0 {
                return Err(AntiSpamError::InvalidLimit { index });
            }
        }
        Ok(())
    }

    // largest window in nanoseconds; only meaningful after validate()
    pub(crate) fn discard_after_nanos(&self) -> u64 {
        self.intervals
            .iter()
            .filter_map(Interval::window_nanos)
            .max()
            .unwrap_or(0)
    }
}

impl Default for AntiSpamConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVALS)
    }
}
