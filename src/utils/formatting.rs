//! Formatting utilities for CLI output.

/// Human-readable duration: "2 hours 5 minutes", "30 minutes", "1 hour".
///
/// The hours term is omitted when zero; the minutes term is omitted when
/// zero *unless* the whole duration is zero, which renders as "0 minutes".
pub fn minutes_to_readable(total_minutes: i64) -> String {
    let total = total_minutes.max(0);
    let hours = total / 60;
    let minutes = total % 60;

    let mut parts: Vec<String> = Vec::new();
    if hours > 0 {
        parts.push(format!("{} hour{}", hours, if hours > 1 { "s" } else { "" }));
    }
    if minutes > 0 || hours == 0 {
        parts.push(format!(
            "{} minute{}",
            minutes,
            if minutes == 1 { "" } else { "s" }
        ));
    }

    parts.join(" ")
}

/// Elapsed-time readout for the active session line, seconds included.
pub fn seconds_to_clock(total_seconds: i64) -> String {
    let s = total_seconds.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}
