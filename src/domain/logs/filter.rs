use chrono::NaiveDateTime;

use super::{DateTimeRange, parse_timestamp};

/// Line terminator written to every output line.
pub const LINE_ENDING: &str = "\n";

/// One raw log line and its leading timestamp, if it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLine<'a> {
    pub raw: &'a str,
    pub timestamp: Option<NaiveDateTime>,
}

impl<'a> LogLine<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self { raw, timestamp: parse_timestamp(raw) }
    }
}

/// Split a buffer on LF or CRLF into parsed lines.
pub fn parse_lines(text: &str) -> impl Iterator<Item = LogLine<'_>> {
    text.lines().map(|line| LogLine::parse(line.strip_suffix('\r').unwrap_or(line)))
}

/// Render `text` with normalized line endings.
///
/// With a range, only timestamped lines inside it are kept; continuation lines
/// such as stack traces have no timestamp and are dropped. Without a range
/// every line passes through.
pub fn filter_log(text: &str, range: Option<&DateTimeRange>) -> String {
    let mut out = String::with_capacity(text.len());
    for line in parse_lines(text) {
        if let Some(range) = range {
            match line.timestamp {
                Some(timestamp) if range.contains(timestamp) => {}
                _ => continue,
            }
        }
        out.push_str(line.raw);
        out.push_str(LINE_ENDING);
    }
    out
}
