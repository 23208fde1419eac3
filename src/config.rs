//! Calendar input configuration with explicit fallback values.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::date::days_in_month;
use crate::error::CalendarError;
use crate::types::{DEFAULT_DATE, DEFAULT_MONTH, DEFAULT_WEEK_STARTS_MONDAY, DEFAULT_YEAR};

/// Year, month and selected date of the calendar to build.
///
/// A zero year, month or date means "unset" and is replaced by the default
/// (2017, 1, 1) in [`CalendarConfig::with_defaults`], which every grid build
/// goes through. Other values are taken as given: a month past 12 rolls into
/// the next year and a date missing from the month selects nothing; any other
/// misuse is the caller's responsibility. Use [`CalendarConfig::validate`] to
/// check a configuration up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    #[serde(deserialize_with = "year_or_default")]
    pub year: i32,
    /// 1-based month (1 = January).
    #[serde(deserialize_with = "month_or_default")]
    pub month: u32,
    /// Day of month to mark as selected.
    #[serde(deserialize_with = "date_or_default")]
    pub date: u32,
    pub week_starts_monday: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            month: DEFAULT_MONTH,
            date: DEFAULT_DATE,
            week_starts_monday: DEFAULT_WEEK_STARTS_MONDAY,
        }
    }
}

impl CalendarConfig {
    /// Sunday-first configuration for the given year, month and date.
    pub fn new(year: i32, month: u32, date: u32) -> Self {
        Self {
            year,
            month,
            date,
            ..Self::default()
        }
    }

    /// Configuration selecting `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }

    pub fn with_week_starts_monday(mut self, week_starts_monday: bool) -> Self {
        self.week_starts_monday = week_starts_monday;
        self
    }

    /// Parse a TOML document such as:
    ///
    /// ```toml
    /// year = 2016
    /// month = 2
    /// date = 29
    /// week_starts_monday = true
    /// ```
    ///
    /// Missing keys and zero values fall back to the defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, CalendarError> {
        Ok(toml::from_str(s)?)
    }

    /// Replace zero (unset) fields with their default values.
    pub fn with_defaults(self) -> Self {
        Self {
            year: year_or_default_value(self.year),
            month: nonzero_or(self.month, DEFAULT_MONTH, "month"),
            date: nonzero_or(self.date, DEFAULT_DATE, "date"),
            week_starts_monday: self.week_starts_monday,
        }
    }

    /// Check that `month` is 1-12 and `date` exists in that month, after
    /// unset fields take their defaults.
    pub fn validate(&self) -> Result<(), CalendarError> {
        let config = self.with_defaults();
        config.validate_resolved()
    }

    fn validate_resolved(&self) -> Result<(), CalendarError> {
        if !(1..=12).contains(&self.month) {
            return Err(CalendarError::InvalidMonth { month: self.month });
        }
        let max_date = days_in_month(self.year, self.month);
        if !(1..=max_date).contains(&self.date) {
            return Err(CalendarError::InvalidDate {
                year: self.year,
                month: self.month,
                date: self.date,
                max_date,
            });
        }
        Ok(())
    }
}

impl From<NaiveDate> for CalendarConfig {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

fn year_or_default_value(year: i32) -> i32 {
    if year == 0 {
        debug!(default = DEFAULT_YEAR, "year is unset; using default");
        DEFAULT_YEAR
    } else {
        year
    }
}

fn nonzero_or(value: u32, default: u32, field: &str) -> u32 {
    if value == 0 {
        debug!(field, default, "field is unset; using default");
        default
    } else {
        value
    }
}

/// Deserialize a year, reading 0 as unset.
fn year_or_default<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    i32::deserialize(deserializer).map(year_or_default_value)
}

fn month_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    u32::deserialize(deserializer).map(|month| nonzero_or(month, DEFAULT_MONTH, "month"))
}

fn date_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    u32::deserialize(deserializer).map(|date| nonzero_or(date, DEFAULT_DATE, "date"))
}
