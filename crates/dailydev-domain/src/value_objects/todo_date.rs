//! Todo list date value object

use crate::constants::TODO_DATE_FORMAT;
use crate::error::{Error, Result};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar date keying a [`DailyTodoList`](crate::entities::DailyTodoList).
///
/// Stored as the ISO-8601 string the client sent. Only presence is checked;
/// the string is not parsed, so any client-chosen key partitions the lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoDate(String);

impl TodoDate {
    /// Wrap a client-supplied date, rejecting blank input
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::missing_field("date"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Today's date in server local time
    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }

    /// Format a calendar date as `YYYY-MM-DD`
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.format(TODO_DATE_FORMAT).to_string())
    }

    /// Use the supplied date, or today's date when the caller omitted it
    pub fn or_today(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some(value) if !value.trim().is_empty() => Self::new(value),
            _ => Ok(Self::today()),
        }
    }

    /// String form used as the storage key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
