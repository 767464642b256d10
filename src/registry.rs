// src/registry.rs

// keyed collection of trackers, one per rate-limited caller

// dependencies
use crate::antispam::AntiSpam;
use crate::clock::{Clock, SystemClock};
use crate::config::AntiSpamConfig;
use crate::errors::AntiSpamError;
use dashmap::DashMap;
use std::hash::Hash;
use std::sync::Arc;
use tracing::debug;

/// Holds one [`AntiSpam`] tracker per key (user, channel, command, ...).
/// K is the type used to identify callers (e.g., String, u64, etc.).
/// C is the clock type, defaulting to SystemClock; every tracker gets a clone.
/// We use `Arc<DashMap>` so the registry can be shared across threads; each
/// tracker is only touched while its shard lock is held.
#[derive(Debug, Clone)]
pub struct AntiSpamRegistry<K, C = SystemClock>
where
    K: Hash + Eq + Clone,
    C: Clock + Clone,
{
    config: AntiSpamConfig,
    trackers: Arc<DashMap<K, AntiSpam<C>>>,
    clock: C,
}

impl<K, C> AntiSpamRegistry<K, C>
where
    K: Hash + Eq + Clone,
    C: Clock + Clone,
{
    /// Create a registry whose trackers all share `config`.
    pub fn new(config: AntiSpamConfig, clock: C) -> Result<Self, AntiSpamError> {
        config.validate()?;
        Ok(Self {
            config,
            trackers: Arc::new(DashMap::new()),
            clock,
        })
    }

    pub fn config(&self) -> &AntiSpamConfig {
        &self.config
    }

    /// Record an event for `key`, creating its tracker on first use.
    pub fn record(&self, key: K) {
        self.trackers
            .entry(key)
            .or_insert_with(|| AntiSpam::from_validated(&self.config, self.clock.clone()))
            .record();
    }

    /// Whether `key` is over any of its limits. Unknown keys never are.
    pub fn is_over_limit(&self, key: &K) -> bool {
        self.trackers
            .get(key)
            .map(|tracker| tracker.is_over_limit())
            .unwrap_or(false)
    }

    /// Drop trackers whose events have all aged past the largest window.
    /// Returns the number of trackers removed.
    pub fn cleanup_idle(&self) -> usize {
        let before = self.trackers.len();
        self.trackers.retain(|_, tracker| !tracker.is_idle());
        let removed = before.saturating_sub(self.trackers.len());
        if removed > 0 {
            debug!(removed, remaining = self.trackers.len(), "removed idle trackers");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.trackers.contains_key(key)
    }
}
