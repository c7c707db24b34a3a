//! Time window model.
//!
//! # Time Model
//! All times are in milliseconds relative to an allocation epoch.
//! The consumer defines what epoch means; the day helpers below treat
//! `t = 0` as the start of day 0.
//!
//! # Exclusivity
//! A capacity unit may serve several requirements as long as their
//! windows do not overlap. Windows that merely touch (one ends exactly
//! when the next starts) are compatible.

use serde::{Deserialize, Serialize};

/// Milliseconds in one day.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    /// Interval start (ms, inclusive).
    pub start_ms: i64,
    /// Interval end (ms, exclusive).
    pub end_ms: i64,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// The whole of day `day`.
    pub fn day(day: i64) -> Self {
        Self::days(day, 1)
    }

    /// `count` consecutive days starting at day `first`.
    pub fn days(first: i64, count: i64) -> Self {
        Self::new(first * DAY_MS, (first + count) * DAY_MS)
    }

    /// Duration of this window (ms).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Whether the window spans no time (or is inverted).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end_ms <= self.start_ms
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, time_ms: i64) -> bool {
        time_ms >= self.start_ms && time_ms < self.end_ms
    }

    /// Whether `other` lies entirely within this window.
    pub fn encloses(&self, other: &Self) -> bool {
        other.start_ms >= self.start_ms && other.end_ms <= self.end_ms
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }
}
