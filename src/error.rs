//! Error types for configuration loading and validation.

/// Error type for the fallible configuration helpers.
///
/// Grid and header construction never fail; these errors come only from
/// [`CalendarConfig::validate`](crate::config::CalendarConfig::validate)
/// and [`CalendarConfig::from_toml_str`](crate::config::CalendarConfig::from_toml_str).
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a date does not exist in the configured month.
    #[error("invalid date: {date} for {year}-{month:02} (max {max_date})")]
    InvalidDate {
        year: i32,
        month: u32,
        date: u32,
        /// Number of days in the configured month.
        max_date: u32,
    },

    /// Returned when a TOML configuration document cannot be parsed.
    #[error("invalid calendar config: {0}")]
    Config(#[from] toml::de::Error),
}
