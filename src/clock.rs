// src/clock.rs

// clock abstraction used to timestamp events

// dependencies
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

/// Clock trait to abstract time retrieval.
/// Implementors must be thread-safe (Send + Sync).
/// The `now` method returns the current time in nanoseconds as a u64.
/// Trackers only ever compare timestamps taken from the same clock, so the
/// epoch is up to the implementation.
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

/// SystemClock implementation using the system time.
/// Returns the current time in nanoseconds since the Unix epoch.
/// A system clock set before the epoch reads as 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
            Err(err) => {
                warn!(error = %err, "system clock is set before the unix epoch");
                0
            }
        }
    }
}
