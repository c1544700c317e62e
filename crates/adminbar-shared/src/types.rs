//! Common types

use chrono::{DateTime, Utc};
use std::time::Duration;

pub type Timestamp = DateTime<Utc>;

/// Age of a snapshot captured at `captured_at`, as seen at `now`.
/// Timestamps in the future count as age zero.
pub fn age_since(captured_at: Timestamp, now: Timestamp) -> Duration {
    (now - captured_at).to_std().unwrap_or(Duration::ZERO)
}
