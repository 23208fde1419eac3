//! Week-start resolution and the weekday header row.

use chrono::Weekday;
use serde::{Serialize, Serializer};

use crate::types::DAYS_PER_WEEK;

const SUNDAY_FIRST: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

const MONDAY_FIRST: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Ordered weekday labels plus the shift that maps a label index to the
/// canonical weekday number (0=Sunday..6=Saturday).
///
/// `labels` is always the Sunday-first order rotated left by `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekModel {
    labels: [Weekday; DAYS_PER_WEEK],
    offset: u32,
}

impl WeekModel {
    /// Resolve the week-start convention.
    pub fn resolve(week_starts_monday: bool) -> Self {
        if week_starts_monday {
            WeekModel {
                labels: MONDAY_FIRST,
                offset: 1,
            }
        } else {
            WeekModel {
                labels: SUNDAY_FIRST,
                offset: 0,
            }
        }
    }

    pub fn labels(&self) -> [Weekday; DAYS_PER_WEEK] {
        self.labels
    }

    /// 0 for Sunday-first weeks, 1 for Monday-first weeks.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// The weekday shown in the first column.
    pub fn week_start(&self) -> Weekday {
        self.labels[0]
    }

    pub fn starts_monday(&self) -> bool {
        self.offset == 1
    }

    /// Label for a column; columns repeat every seven cells.
    pub fn label_for(&self, index: usize) -> Weekday {
        self.labels[index % DAYS_PER_WEEK]
    }

    /// Canonical weekday number (0=Sunday) for a column.
    pub fn weekday_number_for(&self, index: usize) -> u32 {
        ((index % DAYS_PER_WEEK) as u32 + self.offset) % DAYS_PER_WEEK as u32
    }

    /// Build the weekday header row for this model.
    pub fn header(&self) -> [WeekdayHeaderEntry; DAYS_PER_WEEK] {
        weekday_header(self)
    }
}

impl Default for WeekModel {
    fn default() -> Self {
        WeekModel::resolve(false)
    }
}

/// One column heading of the weekday header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekdayHeaderEntry {
    #[serde(serialize_with = "serialize_weekday")]
    pub label: Weekday,
    pub weekday_number: u32,
}

/// Build the seven header entries in the order of the configured week start.
pub fn weekday_header(week: &WeekModel) -> [WeekdayHeaderEntry; DAYS_PER_WEEK] {
    std::array::from_fn(|i| WeekdayHeaderEntry {
        label: week.label_for(i),
        weekday_number: week.weekday_number_for(i),
    })
}

/// Weekdays serialize as chrono's three-letter display form, e.g. `"Sun"`.
pub(crate) fn serialize_weekday<S: Serializer>(
    weekday: &Weekday,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(weekday)
}
