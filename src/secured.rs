// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Redacting wrapper for sensitive values
//!
//! `Debug` and `Display` never reveal the inner value; retrieving it
//! requires an explicit [`Secured::reveal`] call at the use site.
//! `Serialize` is intentionally not implemented so a secret cannot leak
//! through a derived serializer on a containing type.

use std::fmt;

/// A value whose formatted output is always redacted
#[derive(Clone, PartialEq, Eq)]
pub struct Secured<T>(T);

/// The common case
pub type SecuredString = Secured<String>;

impl<T> Secured<T> {
    pub fn new(value: impl Into<T>) -> Self {
        Self(value.into())
    }

    /// Borrow the inner value
    pub fn reveal(&self) -> &T {
        &self.0
    }

    /// Unwrap the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Secured<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> fmt::Debug for Secured<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*****")
    }
}

impl<T> fmt::Display for Secured<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*****")
    }
}
