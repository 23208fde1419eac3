//! Month calendar grid computation for calendar views.
//!
//! Features:
//! - Fixed six-week grid (42 cells) spilling into the adjacent months
//! - Sunday-first or Monday-first weeks
//! - Per-cell flags: weekend, selected date, previous/next month
//! - Weekday header row matching the grid columns
//! - TOML configuration with explicit fallback values
//!
//! ```
//! use calgrid::{Calendar, CalendarConfig};
//!
//! let calendar = Calendar::new(CalendarConfig::new(2016, 2, 29));
//! let grid = calendar.grid();
//! assert_eq!(grid.len(), 42);
//! assert_eq!(grid.selected().unwrap().iso_date(), "20160229");
//! ```

pub mod calendar;
pub mod config;
pub mod date;
pub mod day;
pub mod error;
pub mod grid;
pub mod types;
pub mod week;

pub use calendar::Calendar;
pub use config::CalendarConfig;
pub use day::DayDescriptor;
pub use error::CalendarError;
pub use grid::CalendarGrid;
pub use types::MonthRelation;
pub use week::{WeekModel, WeekdayHeaderEntry};
