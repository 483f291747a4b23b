//! Timestamp formatting for rendered lines
//!
//! A logger instance carries one resolved `TimeFormat`; per-call overrides
//! can swap it for a single submit. Wall-clock (local) time is used since
//! rendered lines are read by people watching a display.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp format for the line prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// Full date and time: `2025-01-08 10:30:45`
    #[default]
    DateTime,

    /// Time of day only: `10:30:45`
    TimeOnly,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use logpane::TimeFormat;
    ///
    /// let format = TimeFormat::Custom("%H:%M".to_string());
    /// ```
    Custom(String),
}

impl TimeFormat {
    /// Format a local timestamp according to this format.
    ///
    /// A custom pattern with invalid strftime specifiers is reported as a
    /// format error rather than aborting the write path.
    pub fn format(&self, datetime: &DateTime<Local>) -> Result<String> {
        let pattern = match self {
            TimeFormat::DateTime => "%Y-%m-%d %H:%M:%S",
            TimeFormat::TimeOnly => "%H:%M:%S",
            TimeFormat::Custom(pattern) => pattern.as_str(),
        };

        let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::format(
                pattern,
                "invalid strftime pattern in time format",
            ));
        }
        Ok(datetime.format_with_items(items.into_iter()).to_string())
    }

    /// The instance format implied by construction-time options: a custom
    /// pattern wins, otherwise a date-inclusion flag picks between the two
    /// fixed patterns.
    #[must_use]
    pub fn from_options(custom_pattern: Option<String>, show_date: bool) -> Self {
        match custom_pattern {
            Some(pattern) => TimeFormat::Custom(pattern),
            None if show_date => TimeFormat::DateTime,
            None => TimeFormat::TimeOnly,
        }
    }
}
