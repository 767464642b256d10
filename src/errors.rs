// src/errors.rs

// error handling for the antispam tracker

// dependencies
use thiserror::Error;

/// Error type for tracker configuration issues.
///
/// Only construction can fail; recording and checking events cannot.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AntiSpamError {
    /// A strict configuration was given no intervals at all.
    #[error("At least one interval must be configured")]
    NoIntervals,

    /// The window at `index` is zero or too long to express in nanoseconds.
    #[error("Interval {index}: window must be positive and fit in u64 nanoseconds")]
    InvalidWindow { index: usize },

    /// The limit at `index` is zero.
    #[error("Interval {index}: limit must be positive")]
    InvalidLimit { index: usize },
}
