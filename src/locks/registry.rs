// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Advisory lock registry over hashable keys
//!
//! Grants are batch-oriented: a caller submits an ordered sequence of keys
//! and receives back the subsequence it actually obtained. A key that
//! cannot be granted (held by someone else, or inside its cooldown window)
//! is simply omitted; lock/unlock never fail.

use super::config::RegistryConfig;
use crate::clock::Clock;
use crate::stats::{RunningStats, StatsSnapshot};
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// In-process advisory lock registry.
///
/// Keys are opaque: anything hashable with value equality works. Two
/// registries are fully independent; a key is "held" only with respect to
/// one registry instance.
///
/// Every `lock` call records one sample per outcome class (granted,
/// cooldown-blocked, already-locked-blocked) whose value is the number of
/// keys in that class for the call, so the aggregators report per-call
/// averages rather than per-key history. Calls that stop early at the
/// capacity ceiling bump a separate counter; the unexamined remainder of
/// such a batch is counted in no statistic.
pub struct LockRegistry<K, C> {
    config: RegistryConfig,
    clock: C,
    /// Held keys and their acquisition time
    active: HashMap<K, Instant>,
    /// Released keys and the instant at which re-locking is allowed again
    cooldown: HashMap<K, Instant>,
    capacity_reached: u64,
    granted: RunningStats,
    cooldown_blocked: RunningStats,
    already_locked: RunningStats,
}

impl<K, C> LockRegistry<K, C>
where
    K: Eq + Hash + Clone,
    C: Clock,
{
    pub fn new(config: RegistryConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            active: HashMap::new(),
            cooldown: HashMap::new(),
            capacity_reached: 0,
            granted: RunningStats::new(),
            cooldown_blocked: RunningStats::new(),
            already_locked: RunningStats::new(),
        }
    }

    /// Registry with default configuration: unlimited, no cooldown
    pub fn with_defaults(clock: C) -> Self {
        Self::new(RegistryConfig::default(), clock)
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Change the capacity ceiling. Effective for subsequent `lock` calls;
    /// never evicts keys already held, even if the ceiling now sits below
    /// the current count.
    pub fn set_capacity(&mut self, capacity: Option<usize>) {
        self.config.capacity = capacity;
    }

    /// Change the cooldown window. Effective for subsequent unlocks;
    /// entries already in cooldown keep their original expiry.
    pub fn set_cooldown(&mut self, cooldown: Option<Duration>) {
        self.config.cooldown = cooldown;
    }

    /// Attempt to lock each key, in input order. Returns the granted
    /// subsequence, preserving input order; duplicates are allowed (the
    /// second occurrence is blocked as already-locked).
    ///
    /// When a capacity is configured and the registry is full, the rest of
    /// the batch is dropped without being examined and the
    /// capacity-reached counter increments once for the call.
    pub fn lock(&mut self, keys: &[K]) -> Vec<K> {
        let now = self.clock.now();
        let mut granted = Vec::new();
        let mut cooldown_blocked = 0u64;
        let mut already_locked = 0u64;

        for key in keys {
            if let Some(capacity) = self.config.capacity {
                if self.active.len() >= capacity {
                    self.capacity_reached += 1;
                    tracing::debug!(capacity, "lock batch stopped at capacity");
                    break;
                }
            }

            match self.cooldown.get(key) {
                Some(&relock_at) if relock_at > now => {
                    cooldown_blocked += 1;
                    continue;
                }
                Some(_) => {
                    // Window has passed; remove lazily and fall through
                    self.cooldown.remove(key);
                }
                None => {}
            }

            if self.active.contains_key(key) {
                already_locked += 1;
                continue;
            }

            self.active.insert(key.clone(), now);
            granted.push(key.clone());
        }

        self.granted.add(granted.len() as f64);
        self.cooldown_blocked.add(cooldown_blocked as f64);
        self.already_locked.add(already_locked as f64);
        tracing::debug!(
            requested = keys.len(),
            granted = granted.len(),
            cooldown_blocked,
            already_locked,
            "lock batch"
        );

        granted
    }

    /// Release keys, in input order. A key not currently held is a no-op.
    /// Returns the keys actually released.
    ///
    /// When a cooldown window is configured, each released key enters
    /// cooldown; expired cooldown entries are swept eagerly afterwards
    /// unless `eager_sweep` is disabled.
    pub fn unlock(&mut self, keys: &[K]) -> Vec<K> {
        let now = self.clock.now();
        let mut released = Vec::new();
        let mut seeded = false;

        for key in keys {
            if self.active.remove(key).is_none() {
                continue;
            }
            if let Some(cooldown) = self.config.cooldown {
                let evicted = self.cooldown.insert(key.clone(), now + cooldown);
                debug_assert!(evicted.is_none(), "key was held and in cooldown at once");
                seeded = true;
            }
            released.push(key.clone());
        }

        if seeded && self.config.eager_sweep {
            self.sweep_expired(now);
        }
        tracing::debug!(
            requested = keys.len(),
            released = released.len(),
            "unlock batch"
        );

        released
    }

    /// Remove every cooldown entry whose window has passed. Idempotent.
    pub fn cleanup(&mut self) {
        let now = self.clock.now();
        self.sweep_expired(now);
    }

    /// Drop both registries and reset all statistics and the
    /// capacity-reached counter. The registry afterwards behaves as if
    /// newly constructed with the same configuration.
    pub fn release_resources(&mut self) {
        self.active.clear();
        self.cooldown.clear();
        self.capacity_reached = 0;
        self.granted.reset();
        self.cooldown_blocked.reset();
        self.already_locked.reset();
        tracing::debug!("lock registry released");
    }

    /// Whether the key is currently held
    pub fn is_held(&self, key: &K) -> bool {
        self.active.contains_key(key)
    }

    /// Number of currently held keys
    pub fn held_count(&self) -> usize {
        self.active.len()
    }

    /// Number of keys currently in cooldown (including not-yet-swept
    /// expired entries)
    pub fn cooldown_count(&self) -> usize {
        self.cooldown.len()
    }

    /// Per-call counts of granted keys
    pub fn granted_stats(&self) -> StatsSnapshot {
        self.granted.snapshot()
    }

    /// Per-call counts of keys refused because of an active cooldown
    pub fn cooldown_blocked_stats(&self) -> StatsSnapshot {
        self.cooldown_blocked.snapshot()
    }

    /// Per-call counts of keys refused because they were already held
    pub fn already_locked_stats(&self) -> StatsSnapshot {
        self.already_locked.snapshot()
    }

    /// How many `lock` calls terminated early at the capacity ceiling
    pub fn capacity_reached_count(&self) -> u64 {
        self.capacity_reached
    }

    fn sweep_expired(&mut self, now: Instant) {
        self.cooldown.retain(|_, relock_at| *relock_at > now);
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
