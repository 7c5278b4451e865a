// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lock registry configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a [`LockRegistry`](super::LockRegistry)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Maximum number of simultaneously held keys; `None` = unlimited
    pub capacity: Option<usize>,
    /// Refusal window after a key is released during which it cannot be
    /// re-locked; `None` disables the cooldown feature entirely
    #[serde(default, with = "humantime_serde")]
    pub cooldown: Option<Duration>,
    /// Sweep expired cooldown entries whenever an unlock seeds a new one
    pub eager_sweep: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            cooldown: None,
            eager_sweep: true,
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = Some(cooldown);
        self
    }

    pub fn with_eager_sweep(mut self, enabled: bool) -> Self {
        self.eager_sweep = enabled;
        self
    }
}
