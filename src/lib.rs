// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! oj-commons: shared utility toolkit
//!
//! This crate provides:
//! - A cooperative, advisory lock registry with capacity and cooldown windows
//! - A mergeable online statistics accumulator
//! - A busy-wait bandwidth throttle
//! - Map diffing, date/time formatting, and secured-value helpers

pub mod clock;
pub mod datefmt;
pub mod error;
pub mod locks;
pub mod mapdiff;
pub mod secured;
pub mod stats;
pub mod throttle;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use error::{ConfigError, DateFmtError};
pub use locks::{LockRegistry, RegistryConfig, SharedLockRegistry};
pub use mapdiff::MapDelta;
pub use secured::{Secured, SecuredString};
pub use stats::{RunningStats, StatsSnapshot};
pub use throttle::{Throttle, ThrottleConfig};
