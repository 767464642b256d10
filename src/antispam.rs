// src/antispam.rs

// antispam: flags a caller once any trailing-window threshold is met

// dependencies
use crate::clock::{Clock, SystemClock};
use crate::config::{AntiSpamConfig, Interval};
use crate::errors::AntiSpamError;
use std::time::Duration;
use tracing::{debug, trace};

/// Tracks the timestamps of recorded events against a fixed set of intervals.
/// C is the clock type, defaulting to SystemClock.
///
/// A tracker belongs to a single caller; `record` takes `&mut self`. Use
/// [`AntiSpamRegistry`](crate::AntiSpamRegistry) to share trackers across
/// threads.
#[derive(Debug, Clone)]
pub struct AntiSpam<C = SystemClock>
where
    C: Clock,
{
    intervals: Vec<Interval>,
    discard_after_nanos: u64,
    timestamps: Vec<u64>,
    clock: C,
}

impl<C> AntiSpam<C>
where
    C: Clock,
{
    /// Create a tracker from a list of intervals.
    ///
    /// An empty list falls back to [`DEFAULT_INTERVALS`](crate::DEFAULT_INTERVALS);
    /// a non-empty one must pass validation.
    pub fn new<I>(intervals: I, clock: C) -> Result<Self, AntiSpamError>
    where
        I: IntoIterator,
        I::Item: Into<Interval>,
    {
        let config = AntiSpamConfig::new(intervals);
        if config.intervals.is_empty() {
            return Self::with_config(AntiSpamConfig::default(), clock);
        }
        Self::with_config(config, clock)
    }

    /// Create a tracker from a config object. An empty config is rejected.
    pub fn with_config(config: AntiSpamConfig, clock: C) -> Result<Self, AntiSpamError> {
        config.validate()?;
        Ok(Self::from_validated(&config, clock))
    }

    pub(crate) fn from_validated(config: &AntiSpamConfig, clock: C) -> Self {
        Self {
            intervals: config.intervals.clone(),
            discard_after_nanos: config.discard_after_nanos(),
            timestamps: Vec::new(),
            clock,
        }
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// The largest configured window; older events are dropped on `record`.
    pub fn discard_after(&self) -> Duration {
        Duration::from_nanos(self.discard_after_nanos)
    }

    /// Number of timestamps currently held, including ones that have aged
    /// out but not yet been pruned.
    pub fn event_count(&self) -> usize {
        self.timestamps.len()
    }

    /// Record one event at the current time and prune anything older than
    /// the largest window.
    pub fn record(&mut self) {
        let now = self.clock.now();
        self.timestamps.push(now);

        let before = self.timestamps.len();
        let discard_after = self.discard_after_nanos;
        self.timestamps
            .retain(|&t| t.saturating_add(discard_after) > now);

        let pruned = before - self.timestamps.len();
        if pruned > 0 {
            trace!(pruned, remaining = self.timestamps.len(), "pruned expired events");
        }
    }

    /// Whether any interval currently holds at least `limit` events.
    /// Does not prune.
    pub fn is_over_limit(&self) -> bool {
        let now = self.clock.now();
        self.intervals
            .iter()
            .any(|interval| self.is_breached(interval, now))
    }

    /// The intervals currently at or over their limit, in configured order.
    pub fn breached_intervals(&self) -> Vec<Interval> {
        let now = self.clock.now();
        self.intervals
            .iter()
            .filter(|interval| self.is_breached(interval, now))
            .copied()
            .collect()
    }

    // an event counts while t + window > now; equality means it has expired
    fn is_breached(&self, interval: &Interval, now: u64) -> bool {
        let window = interval.window_nanos().unwrap_or(u64::MAX);
        let count = self
            .timestamps
            .iter()
            .filter(|&&t| t.saturating_add(window) > now)
            .count();

        let breached = count >= interval.limit() as usize;
        if breached {
            debug!(
                window_secs = interval.window().as_secs_f64(),
                limit = interval.limit(),
                count,
                "interval limit reached"
            );
        }
        breached
    }

    // true once every held event is outside the largest window
    pub(crate) fn is_idle(&self) -> bool {
        let now = self.clock.now();
        self.timestamps
            .iter()
            .all(|&t| t.saturating_add(self.discard_after_nanos) <= now)
    }
}
