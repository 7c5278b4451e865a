// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the toolkit
//!
//! Configuration mistakes are the only caller-facing failures. A key that
//! cannot be locked, or an unlock of a key nobody holds, is an ordinary
//! outcome reported through return values and counters, never an error.

use thiserror::Error;

/// Errors reported synchronously by constructors and setters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rate must be positive")]
    ZeroRate,
}

/// Errors from the date/time helpers
#[derive(Debug, Error)]
pub enum DateFmtError {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),
    #[error("invalid duration: {0}")]
    InvalidDuration(#[from] humantime::DurationError),
}
