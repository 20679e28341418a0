//! PHP error log parsing and date/time range filtering.

mod filter;
mod range;
mod timestamp;

pub use filter::{LINE_ENDING, LogLine, filter_log, parse_lines};
pub use range::{DateTimeRange, parse_date, parse_time_of_day};
pub use timestamp::{format_timestamp, parse_timestamp};
