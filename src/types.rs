//! Shared constants and small enums for grid construction.

use serde::Serialize;

/// Which month a grid cell belongs to, relative to the configured month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthRelation {
    /// Trailing days of the month before the configured one.
    Previous,
    /// The configured month itself.
    Current,
    /// Leading days of the month after the configured one.
    Next,
}

impl MonthRelation {
    /// Classify a raw day number against the length of the current month.
    ///
    /// `day` is the 1-based position relative to day 1 of the current month;
    /// values below 1 spill into the previous month, values past `last_date`
    /// into the next one.
    pub fn classify(day: i32, last_date: u32) -> Self {
        if day < 1 {
            MonthRelation::Previous
        } else if day > last_date as i32 {
            MonthRelation::Next
        } else {
            MonthRelation::Current
        }
    }
}

// Grid geometry
pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const CELLS_PER_GRID: usize = DAYS_PER_WEEK * WEEKS_PER_GRID; // 6 weeks × 7 days

// Fallback configuration values used when a field is not supplied
pub const DEFAULT_YEAR: i32 = 2017;
pub const DEFAULT_MONTH: u32 = 1;
pub const DEFAULT_DATE: u32 = 1;
pub const DEFAULT_WEEK_STARTS_MONDAY: bool = false;

// Leading offset used when a Monday-first grid shows a month starting on Sunday
pub const MONDAY_FIRST_SUNDAY_OFFSET: i32 = 5;
