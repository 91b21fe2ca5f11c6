//! Timestamp utilities: ISO-8601 parsing/formatting and ISO week keys.

use chrono::{Datelike, NaiveDateTime};

/// Render a timestamp the way it is stored in the `sessions` table:
/// ISO-8601 local time, fractional seconds kept when present.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

/// Parse a stored timestamp. Accepts both plain seconds and fractional
/// seconds, so databases written by older versions read back fine.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    s.parse::<NaiveDateTime>().ok()
}

/// ISO year-week key ("YYYY-Www") for a timestamp, per the ISO 8601
/// week-numbering calendar. Jan 1st can land in the previous year's last
/// week, which is why this uses the ISO week year and not the calendar year.
pub fn week_key(ts: NaiveDateTime) -> String {
    let iso = ts.date().iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// Wall-clock "now" as stored timestamps are kept: local naive time.
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
