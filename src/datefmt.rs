// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Date/time formatting helpers

use crate::error::DateFmtError;
use chrono::{DateTime, SecondsFormat, Utc};
use std::time::Duration;

/// RFC3339 with second precision, e.g. `2024-01-13T12:34:56Z`
pub fn rfc3339(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an RFC3339 timestamp into UTC
pub fn parse_rfc3339(input: &str) -> Result<DateTime<Utc>, DateFmtError> {
    Ok(DateTime::parse_from_rfc3339(input.trim())?.with_timezone(&Utc))
}

/// Compact filesystem-safe stamp: `YYYYMMDD-HHMMSS`
pub fn compact_stamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y%m%d-%H%M%S").to_string()
}

/// Human-readable duration, e.g. `2m 3s`
pub fn human_duration(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}

/// Parse `30s`, `5m`, `1h 30m` style durations
pub fn parse_duration(input: &str) -> Result<Duration, DateFmtError> {
    Ok(humantime::parse_duration(input.trim())?)
}

/// Elapsed time as `H:MM:SS` (hours unbounded)
pub fn elapsed_hms(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

#[cfg(test)]
#[path = "datefmt_tests.rs"]
mod tests;
