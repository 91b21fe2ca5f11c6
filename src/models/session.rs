use chrono::NaiveDateTime;
use serde::Serialize;

/// One persisted clock-in/clock-out interval.
///
/// Records are immutable once inserted; the only mutation the store supports
/// is a bulk delete-all. A record only exists for a *finished* session: while
/// a session is running its start time lives in the tracker, not in the DB.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    pub id: i64,
    pub clock_in: NaiveDateTime,  // ⇔ sessions.clock_in (TEXT, ISO-8601)
    pub clock_out: NaiveDateTime, // ⇔ sessions.clock_out (TEXT, ISO-8601)
    pub duration_minutes: i64,    // ⇔ sessions.duration_minutes (INT, >= 0)
    pub notes: String,            // ⇔ sessions.notes (TEXT, may be empty)
}

impl SessionRecord {
    /// Build a record for a session that just ended.
    /// The duration is the interval rounded to whole minutes.
    pub fn finished(clock_in: NaiveDateTime, clock_out: NaiveDateTime, notes: &str) -> Self {
        let secs = (clock_out - clock_in).num_seconds();
        let duration_minutes = ((secs as f64) / 60.0).round() as i64;
        Self {
            id: 0,
            clock_in,
            clock_out,
            duration_minutes: duration_minutes.max(0),
            notes: notes.to_string(),
        }
    }
}
