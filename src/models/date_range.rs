//! Date range model.
//!
//! Planning operates at whole-day granularity: a range is a pair of
//! calendar dates, inclusive on both ends. No timezone reasoning — the
//! consumer decides what "a day" means.
//!
//! # Normalization
//! A reversed range (end before start) is repaired by swapping the
//! endpoints, never rejected. After [`DateRange::normalized`] the
//! invariant `start <= end` holds and `total_days() >= 1`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range. Endpoints may arrive reversed; call
    /// [`normalized`](Self::normalized) before counting or iterating days.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A single-day range.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the range with endpoints swapped if they arrived reversed.
    pub fn normalized(self) -> Self {
        if self.end < self.start {
            Self {
                start: self.end,
                end: self.start,
            }
        } else {
            self
        }
    }

    /// Number of days covered, inclusive of both endpoints. Never below 1.
    pub fn total_days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(1)
    }

    /// Whether a date falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates every date in the range in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.total_days() as usize)
    }
}
