//! State-change notifications emitted by the tracker.
//!
//! The display surface and the animation layer both subscribe to these
//! instead of poking at tracker fields directly.

use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub enum TrackerEvent {
    /// A session just started.
    SessionStarted { at: NaiveDateTime },

    /// A session just ended. `persisted` is false when the store rejected
    /// the record; the session is over either way.
    SessionEnded {
        duration_minutes: i64,
        persisted: bool,
    },

    /// The running total changed.
    TotalsUpdated { total_minutes: i64 },

    /// All records were wiped.
    Reset,
}

pub trait TrackerObserver {
    fn on_event(&mut self, event: &TrackerEvent);
}
