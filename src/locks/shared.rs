// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thread-safe handle over a lock registry

use super::config::RegistryConfig;
use super::registry::LockRegistry;
use crate::clock::Clock;
use crate::stats::StatsSnapshot;
use std::hash::Hash;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Cloneable handle sharing one [`LockRegistry`] across threads.
///
/// Every operation holds the registry mutex for its full duration, so a
/// whole batch is one atomic step relative to all other callers. No
/// fairness is guaranteed across waiting callers beyond what the std
/// mutex provides.
pub struct SharedLockRegistry<K, C> {
    inner: Arc<Mutex<LockRegistry<K, C>>>,
}

impl<K, C> Clone for SharedLockRegistry<K, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, C> SharedLockRegistry<K, C>
where
    K: Eq + Hash + Clone,
    C: Clock,
{
    pub fn new(config: RegistryConfig, clock: C) -> Self {
        Self::from_registry(LockRegistry::new(config, clock))
    }

    pub fn from_registry(registry: LockRegistry<K, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// See [`LockRegistry::lock`]
    pub fn lock(&self, keys: &[K]) -> Vec<K> {
        self.with(|r| r.lock(keys))
    }

    /// See [`LockRegistry::unlock`]
    pub fn unlock(&self, keys: &[K]) -> Vec<K> {
        self.with(|r| r.unlock(keys))
    }

    pub fn cleanup(&self) {
        self.with(|r| r.cleanup());
    }

    pub fn release_resources(&self) {
        self.with(|r| r.release_resources());
    }

    pub fn set_capacity(&self, capacity: Option<usize>) {
        self.with(|r| r.set_capacity(capacity));
    }

    pub fn set_cooldown(&self, cooldown: Option<Duration>) {
        self.with(|r| r.set_cooldown(cooldown));
    }

    pub fn is_held(&self, key: &K) -> bool {
        self.with(|r| r.is_held(key))
    }

    pub fn held_count(&self) -> usize {
        self.with(|r| r.held_count())
    }

    pub fn cooldown_count(&self) -> usize {
        self.with(|r| r.cooldown_count())
    }

    pub fn granted_stats(&self) -> StatsSnapshot {
        self.with(|r| r.granted_stats())
    }

    pub fn cooldown_blocked_stats(&self) -> StatsSnapshot {
        self.with(|r| r.cooldown_blocked_stats())
    }

    pub fn already_locked_stats(&self) -> StatsSnapshot {
        self.with(|r| r.already_locked_stats())
    }

    pub fn capacity_reached_count(&self) -> u64 {
        self.with(|r| r.capacity_reached_count())
    }

    fn with<T>(&self, f: impl FnOnce(&mut LockRegistry<K, C>) -> T) -> T {
        let mut registry = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut registry)
    }
}

#[cfg(test)]
#[path = "shared_tests.rs"]
mod tests;
