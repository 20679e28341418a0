use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::domain::AppError;

/// Inclusive `[start, end]` instant range.
///
/// An inverted range is allowed and simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateTimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Combine independently chosen dates and times of day.
    pub fn from_parts(
        start_date: NaiveDate,
        start_time: NaiveTime,
        end_date: NaiveDate,
        end_time: NaiveTime,
    ) -> Self {
        Self::new(start_date.and_time(start_time), end_date.and_time(end_time))
    }

    /// Build from dates and `HH:MM:SS` text. Malformed times are errors, never defaults.
    pub fn parse(
        start_date: NaiveDate,
        start_time: &str,
        end_date: NaiveDate,
        end_time: &str,
    ) -> Result<Self, AppError> {
        Ok(Self::from_parts(
            start_date,
            parse_time_of_day(start_time)?,
            end_date,
            parse_time_of_day(end_time)?,
        ))
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }
}

/// Parse `HH:MM:SS` (one or two digits per field).
pub fn parse_time_of_day(text: &str) -> Result<NaiveTime, AppError> {
    let invalid = || AppError::InvalidTime(text.to_string());
    let parts: Vec<&str> = text.trim().split(':').collect();
    let [hour, minute, second] = parts.as_slice() else {
        return Err(invalid());
    };

    let mut fields = [0u32; 3];
    for (field, part) in fields.iter_mut().zip([hour, minute, second]) {
        if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *field = part.parse().map_err(|_| invalid())?;
    }

    NaiveTime::from_hms_opt(fields[0], fields[1], fields[2]).ok_or_else(invalid)
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(text.to_string()))
}
