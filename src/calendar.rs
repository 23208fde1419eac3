//! Calendar facade: grid and weekday header computed once per configuration.

use crate::config::CalendarConfig;
use crate::grid::CalendarGrid;
use crate::types::DAYS_PER_WEEK;
use crate::week::{WeekModel, WeekdayHeaderEntry, weekday_header};

/// A month view built from a [`CalendarConfig`].
///
/// The grid and header are computed at construction. Accessors hand out
/// owned copies, so changes to a returned value never reach the calendar
/// or other callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    config: CalendarConfig,
    week: WeekModel,
    grid: CalendarGrid,
    header: [WeekdayHeaderEntry; DAYS_PER_WEEK],
}

impl Calendar {
    /// Build the calendar; zero fields in `config` take their defaults.
    pub fn new(config: CalendarConfig) -> Self {
        let config = config.with_defaults();
        let week = WeekModel::resolve(config.week_starts_monday);
        let grid = CalendarGrid::build_with(&config, &week);
        let header = weekday_header(&week);
        Calendar {
            config,
            week,
            grid,
            header,
        }
    }

    /// A copy of the 42-cell grid.
    pub fn grid(&self) -> CalendarGrid {
        self.grid.clone()
    }

    /// A copy of the seven-entry weekday header.
    pub fn weekday_header(&self) -> [WeekdayHeaderEntry; DAYS_PER_WEEK] {
        self.header
    }

    pub fn config(&self) -> CalendarConfig {
        self.config
    }

    pub fn week_model(&self) -> WeekModel {
        self.week
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Calendar::new(CalendarConfig::default())
    }
}

impl From<CalendarConfig> for Calendar {
    fn from(config: CalendarConfig) -> Self {
        Calendar::new(config)
    }
}
