// src/lib.rs

//! # AntiSpam
//!
//! Tracks events against several trailing windows at once and reports when
//! any window's limit has been reached.
//!
//! ## Quick Example
//!
//! ```rust
//! use antispam::{AntiSpam, SystemClock};
//! use std::time::Duration;
//!
//! let mut tracker = AntiSpam::new(
//!     [(Duration::from_secs(5), 3u32), (Duration::from_secs(60), 5u32)],
//!     SystemClock,
//! )
//! .unwrap();
//!
//! for _ in 0..3 {
//!     tracker.record();
//! }
//! assert!(tracker.is_over_limit());
//! ```
//!
//! Passing no intervals selects [`DEFAULT_INTERVALS`]: 3 per 5 seconds,
//! 5 per minute, 10 per hour and 24 per day.
//!
//! Use [`AntiSpamRegistry`] to keep one tracker per user behind a shared,
//! thread-safe map.

// private modules
mod antispam;
mod clock;
mod config;
mod errors;
mod registry;
mod safety;

// public API exports
pub use antispam::AntiSpam;
pub use clock::{Clock, SystemClock};
pub use config::{AntiSpamConfig, DEFAULT_INTERVALS, Interval};
pub use errors::AntiSpamError;
pub use registry::AntiSpamRegistry;
pub use safety::{Unsafe, warn_unsafe};
