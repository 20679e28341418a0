use chrono::{NaiveDate, NaiveDateTime};

const MONTHS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Parse the leading `[DD-Mon-YYYY HH:MM:SS` of a PHP error log line.
///
/// Month abbreviations are case-sensitive. Anything else, including impossible
/// dates such as `31-Feb`, yields `None`.
pub fn parse_timestamp(line: &str) -> Option<NaiveDateTime> {
    let rest = line.strip_prefix('[')?;
    let (day, rest) = take_digits(rest, 1, 2)?;
    let rest = rest.strip_prefix('-')?;

    let month_text = rest.get(..3)?;
    let month = MONTHS.iter().position(|m| *m == month_text)? as u32 + 1;
    let rest = rest[3..].strip_prefix('-')?;

    let (year, rest) = take_digits(rest, 4, 4)?;
    let rest = rest.strip_prefix(' ')?;
    let (hour, rest) = take_digits(rest, 2, 2)?;
    let rest = rest.strip_prefix(':')?;
    let (minute, rest) = take_digits(rest, 2, 2)?;
    let rest = rest.strip_prefix(':')?;
    let (second, _) = take_digits(rest, 2, 2)?;

    NaiveDate::from_ymd_opt(year as i32, month, day)?.and_hms_opt(hour, minute, second)
}

/// Render a timestamp the way PHP-FPM prefixes its log lines (without the zone).
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    format!("[{}", timestamp.format("%d-%b-%Y %H:%M:%S"))
}

fn take_digits(text: &str, min: usize, max: usize) -> Option<(u32, &str)> {
    let len = text.bytes().take(max).take_while(u8::is_ascii_digit).count();
    if len < min {
        return None;
    }
    Some((text[..len].parse().ok()?, &text[len..]))
}
