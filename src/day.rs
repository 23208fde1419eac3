//! A single grid cell and the factory that builds it.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::types::MonthRelation;
use crate::week::{WeekModel, serialize_weekday};

/// Everything a presentation layer needs to draw one grid cell.
///
/// Built once during grid construction and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DayDescriptor {
    year: i32,
    /// Zero-based month (0 = January).
    month0: u32,
    date: u32,
    /// `YYYYMMDD`, year unpadded.
    iso_date: String,
    #[serde(serialize_with = "serialize_weekday")]
    weekday_label: Weekday,
    weekday_number: u32,
    is_sunday: bool,
    is_saturday: bool,
    belongs_to_previous_month: bool,
    belongs_to_next_month: bool,
    is_selected_date: bool,
}

impl DayDescriptor {
    /// Build the descriptor for cell `index`.
    ///
    /// `month` is 1-based. The weekday label and number come from the grid
    /// column (`index % 7`), not from a lookup of the resolved date. Only a
    /// current-month cell whose `date` equals `selected_date` is selected.
    pub fn build(
        year: i32,
        month: u32,
        date: u32,
        index: usize,
        relation: MonthRelation,
        week: &WeekModel,
        selected_date: u32,
    ) -> Self {
        let weekday_number = week.weekday_number_for(index);
        let belongs_to_previous_month = relation == MonthRelation::Previous;
        let belongs_to_next_month = relation == MonthRelation::Next;

        DayDescriptor {
            year,
            month0: month.saturating_sub(1),
            date,
            iso_date: format!("{year}{month:02}{date:02}"),
            weekday_label: week.label_for(index),
            weekday_number,
            is_sunday: weekday_number == 0,
            is_saturday: weekday_number == 6,
            belongs_to_previous_month,
            belongs_to_next_month,
            is_selected_date: !belongs_to_previous_month
                && !belongs_to_next_month
                && date == selected_date,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month (0 = January).
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// One-based month (1 = January).
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    /// Day of month, 1-based.
    pub fn date(&self) -> u32 {
        self.date
    }

    /// Sortable `YYYYMMDD` key, e.g. `"20170101"`.
    pub fn iso_date(&self) -> &str {
        &self.iso_date
    }

    /// Two-digit month, e.g. `"01"`.
    pub fn padded_month(&self) -> String {
        format!("{:02}", self.month())
    }

    /// Two-digit day of month, e.g. `"09"`.
    pub fn padded_date(&self) -> String {
        format!("{:02}", self.date)
    }

    pub fn weekday_label(&self) -> Weekday {
        self.weekday_label
    }

    /// Three-letter weekday name, e.g. `"Sun"`.
    pub fn weekday_short_name(&self) -> String {
        self.weekday_label.to_string()
    }

    /// Canonical weekday number, 0 = Sunday through 6 = Saturday.
    pub fn weekday_number(&self) -> u32 {
        self.weekday_number
    }

    pub fn is_sunday(&self) -> bool {
        self.is_sunday
    }

    pub fn is_saturday(&self) -> bool {
        self.is_saturday
    }

    pub fn is_weekend(&self) -> bool {
        self.is_sunday || self.is_saturday
    }

    pub fn belongs_to_previous_month(&self) -> bool {
        self.belongs_to_previous_month
    }

    pub fn belongs_to_next_month(&self) -> bool {
        self.belongs_to_next_month
    }

    pub fn belongs_to_current_month(&self) -> bool {
        !self.belongs_to_previous_month && !self.belongs_to_next_month
    }

    pub fn relation(&self) -> MonthRelation {
        if self.belongs_to_previous_month {
            MonthRelation::Previous
        } else if self.belongs_to_next_month {
            MonthRelation::Next
        } else {
            MonthRelation::Current
        }
    }

    pub fn is_selected_date(&self) -> bool {
        self.is_selected_date
    }

    /// The cell's date as a `NaiveDate`, if chrono can represent it.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month(), self.date)
    }
}
