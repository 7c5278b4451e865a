// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Busy-wait bandwidth throttle
//!
//! Keeps a consumer at or below a configured rate. The consumer reports
//! what it used via [`Throttle::register`] and calls [`Throttle::wait`],
//! which sleeps in small steps until consumption is back on schedule.
//! Chunk sizes feed a [`RunningStats`] so callers can inspect their own
//! consumption pattern.

use crate::clock::Clock;
use crate::error::ConfigError;
use crate::stats::{RunningStats, StatsSnapshot};
use std::time::{Duration, Instant};

/// Throttle configuration
#[derive(Clone, Debug)]
pub struct ThrottleConfig {
    /// Permitted units per second
    pub rate: u64,
    /// Sleep quantum for the wait loop
    pub check_interval: Duration,
}

impl ThrottleConfig {
    pub fn new(rate: u64) -> Self {
        Self {
            rate,
            check_interval: Duration::from_millis(1),
        }
    }

    pub fn with_check_interval(mut self, interval: Duration) -> Self {
        self.check_interval = interval;
        self
    }
}

/// Busy-wait rate limiter over an injectable clock.
///
/// The schedule starts at the first `register` call: after a total of `n`
/// units, the consumer is on schedule once `n / rate` seconds have passed
/// since that first call.
pub struct Throttle<C: Clock> {
    config: ThrottleConfig,
    clock: C,
    started: Option<Instant>,
    total: u64,
    chunks: RunningStats,
}

impl<C: Clock> Throttle<C> {
    pub fn new(config: ThrottleConfig, clock: C) -> Result<Self, ConfigError> {
        if config.rate == 0 {
            return Err(ConfigError::ZeroRate);
        }
        Ok(Self {
            config,
            clock,
            started: None,
            total: 0,
            chunks: RunningStats::new(),
        })
    }

    pub fn config(&self) -> &ThrottleConfig {
        &self.config
    }

    /// Record consumption of `amount` units
    pub fn register(&mut self, amount: u64) {
        if self.started.is_none() {
            self.started = Some(self.clock.now());
        }
        self.total += amount;
        self.chunks.add(amount as f64);
    }

    /// How long the consumer must pause to fall back onto the permitted
    /// schedule; zero when on or behind schedule, or before the first
    /// `register` call.
    pub fn delay(&self) -> Duration {
        let Some(started) = self.started else {
            return Duration::ZERO;
        };
        let allowed = Duration::from_secs_f64(self.total as f64 / self.config.rate as f64);
        (started + allowed).saturating_duration_since(self.clock.now())
    }

    /// Sleep in `check_interval` steps until consumption is back on
    /// schedule
    pub fn wait(&self) {
        loop {
            let remaining = self.delay();
            if remaining.is_zero() {
                return;
            }
            tracing::trace!(remaining_us = remaining.as_micros() as u64, "throttle wait");
            std::thread::sleep(remaining.min(self.config.check_interval));
        }
    }

    /// Total units registered since construction or the last reset
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Per-`register`-call chunk size statistics
    pub fn chunk_stats(&self) -> StatsSnapshot {
        self.chunks.snapshot()
    }

    /// Forget the schedule and all consumption history
    pub fn reset(&mut self) {
        self.started = None;
        self.total = 0;
        self.chunks.reset();
    }
}

#[cfg(test)]
#[path = "throttle_tests.rs"]
mod tests;
