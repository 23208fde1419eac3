//! Six-week calendar grid construction.

use std::ops::Index;

use chrono::Weekday;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::config::CalendarConfig;
use crate::date::MonthRef;
use crate::day::DayDescriptor;
use crate::types::{CELLS_PER_GRID, DAYS_PER_WEEK, MONDAY_FIRST_SUNDAY_OFFSET, MonthRelation};
use crate::week::WeekModel;

/// Compute the leading offset for a month whose day 1 falls on `first_weekday`.
///
/// Day 1 lands in cell `leading_offset + 1`. A Monday-first grid showing a
/// month that starts on Sunday is pinned to 5, placing day 1 in the last
/// column of the first row.
pub fn leading_offset(first_weekday: Weekday, week: &WeekModel) -> i32 {
    let index = first_weekday.num_days_from_sunday() as i32;
    if week.starts_monday() && first_weekday == Weekday::Sun {
        MONDAY_FIRST_SUNDAY_OFFSET
    } else {
        index - 1 - week.offset() as i32
    }
}

/// Exactly 42 day cells, row-major: row = index / 7, column = index % 7.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarGrid {
    cells: [DayDescriptor; CELLS_PER_GRID],
}

impl CalendarGrid {
    /// Build the grid for `config`.
    ///
    /// Never fails: zero fields take their defaults, months past 12 roll into
    /// the next year and a `date` missing from the month selects no cell.
    pub fn build(config: &CalendarConfig) -> Self {
        let week = WeekModel::resolve(config.week_starts_monday);
        Self::build_with(config, &week)
    }

    /// Build the grid with an already resolved week model.
    #[tracing::instrument(level = "debug", skip_all, fields(year = config.year, month = config.month))]
    pub fn build_with(config: &CalendarConfig, week: &WeekModel) -> Self {
        let config = config.with_defaults();
        let current = MonthRef::normalized(config.year, config.month);
        let previous = current.prev();
        let next = current.next();

        let first_weekday = current.first_weekday();
        let offset = leading_offset(first_weekday, week);
        let last_date = current.last_date();
        let prev_last_date = previous.last_date();

        debug!(
            ?first_weekday,
            leading_offset = offset,
            last_date,
            prev_last_date,
            "resolved month boundaries"
        );
        if !(1..=last_date).contains(&config.date) {
            debug!(
                date = config.date,
                last_date, "configured date is not in the month; no cell will be selected"
            );
        }

        let cells = std::array::from_fn(|i| {
            let day = i as i32 - offset;
            let relation = MonthRelation::classify(day, last_date);
            let (month, date) = match relation {
                MonthRelation::Previous => (previous, (prev_last_date as i32 + day) as u32),
                MonthRelation::Next => (next, (day - last_date as i32) as u32),
                MonthRelation::Current => (current, day as u32),
            };
            DayDescriptor::build(
                month.year(),
                month.month(),
                date,
                i,
                relation,
                week,
                config.date,
            )
        });

        CalendarGrid { cells }
    }

    /// Always 42.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayDescriptor> {
        self.cells.iter()
    }

    pub fn cells(&self) -> &[DayDescriptor] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<&DayDescriptor> {
        self.cells.get(index)
    }

    /// Cell at `row` (0-5) and `column` (0-6).
    pub fn cell(&self, row: usize, column: usize) -> Option<&DayDescriptor> {
        if column >= DAYS_PER_WEEK {
            return None;
        }
        self.cells.get(row * DAYS_PER_WEEK + column)
    }

    /// The six weeks of the grid, seven cells each.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, DayDescriptor> {
        self.cells.chunks_exact(DAYS_PER_WEEK)
    }

    /// The selected cell, if the configured date exists in the month.
    pub fn selected(&self) -> Option<&DayDescriptor> {
        self.cells.iter().find(|cell| cell.is_selected_date())
    }

    /// Cells of the configured month, in cell order.
    pub fn current_month(&self) -> impl Iterator<Item = &DayDescriptor> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.belongs_to_current_month())
    }

    pub fn into_vec(self) -> Vec<DayDescriptor> {
        self.cells.into()
    }
}

// serde only covers arrays up to 32 elements
impl Serialize for CalendarGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.iter())
    }
}

impl Index<usize> for CalendarGrid {
    type Output = DayDescriptor;

    fn index(&self, index: usize) -> &DayDescriptor {
        &self.cells[index]
    }
}

impl IntoIterator for CalendarGrid {
    type Item = DayDescriptor;
    type IntoIter = std::array::IntoIter<DayDescriptor, CELLS_PER_GRID>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a CalendarGrid {
    type Item = &'a DayDescriptor;
    type IntoIter = std::slice::Iter<'a, DayDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
