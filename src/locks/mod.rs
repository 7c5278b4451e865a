// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cooperative object locking
//!
//! This module provides:
//! - **LockRegistry** - advisory batch lock/unlock over hashable keys with
//!   an optional capacity ceiling and an optional post-release cooldown
//! - **SharedLockRegistry** - cloneable `Arc<Mutex<_>>` handle for
//!   concurrent callers
//! - **RegistryConfig** - serializable configuration

pub mod config;
pub mod registry;
pub mod shared;

pub use config::RegistryConfig;
pub use registry::LockRegistry;
pub use shared::SharedLockRegistry;
