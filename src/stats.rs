// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mergeable online statistics accumulator
//!
//! Tracks count/min/max/sum/sum-of-squares for a stream of samples.
//! Two accumulators maintained independently (e.g. one per shard) can be
//! merged into a single accumulator equivalent to one that observed the
//! union of both sample streams.

use serde::{Deserialize, Serialize};

/// Online accumulator of numeric samples.
///
/// Plain value type with copy semantics; safe to share by copy, or by
/// reference under a single writer at a time.
///
/// Variance is derived from the raw second moment
/// (`sum_sq / n - mean^2`), which loses precision for large magnitudes or
/// large sample counts. That is acceptable for the per-call telemetry this
/// type backs; callers needing a numerically robust estimator over large
/// or skewed datasets should not repurpose it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunningStats {
    count: u64,
    min: f64,
    max: f64,
    sum: f64,
    sum_sq: f64,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample
    pub fn add(&mut self, x: f64) {
        if self.count == 0 {
            self.min = x;
            self.max = x;
        } else {
            if x < self.min {
                self.min = x;
            }
            if x > self.max {
                self.max = x;
            }
        }
        self.count += 1;
        self.sum += x;
        self.sum_sq += x * x;
    }

    /// Fold another accumulator into this one.
    ///
    /// Equivalent to having observed the union of both sample streams.
    /// Associative and commutative (up to floating-point rounding of the
    /// sums), so shard-local accumulators can be combined pairwise in any
    /// order.
    pub fn merge(&mut self, other: &RunningStats) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = *other;
            return;
        }
        self.count += other.count;
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        if other.min < self.min {
            self.min = other.min;
        }
        if other.max > self.max {
            self.max = other.max;
        }
    }

    /// Return to the empty state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Smallest sample seen; `None` before the first sample
    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    /// Largest sample seen; `None` before the first sample
    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn sum_of_squares(&self) -> f64 {
        self.sum_sq
    }

    /// Arithmetic mean; 0 when empty
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// Population variance from the raw second moment.
    ///
    /// NaN when empty, 0 for a single sample.
    pub fn variance(&self) -> f64 {
        match self.count {
            0 => f64::NAN,
            1 => 0.0,
            n => {
                let mean = self.sum / n as f64;
                self.sum_sq / n as f64 - mean * mean
            }
        }
    }

    /// Population standard deviation; NaN when empty, 0 for a single sample
    pub fn std_dev(&self) -> f64 {
        match self.count {
            0 => f64::NAN,
            1 => 0.0,
            _ => self.variance().sqrt(),
        }
    }

    /// `max - min`; 0 when empty
    pub fn range(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.max - self.min
        }
    }

    /// Read-only view for telemetry polling
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            count: self.count,
            min: self.min(),
            max: self.max(),
            sum: self.sum,
            mean: self.mean(),
            variance: (self.count > 0).then(|| self.variance()),
            std_dev: (self.count > 0).then(|| self.std_dev()),
        }
    }
}

/// Serializable snapshot of a [`RunningStats`].
///
/// `min`/`max`/`variance`/`std_dev` are `None` for an empty accumulator
/// (NaN is not representable in JSON).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub count: u64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub sum: f64,
    pub mean: f64,
    pub variance: Option<f64>,
    pub std_dev: Option<f64>,
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
