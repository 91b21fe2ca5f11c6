//! The session tracker: a two-state machine over the session store.

use crate::core::events::{TrackerEvent, TrackerObserver};
use crate::db::SessionStore;
use crate::errors::AppResult;
use crate::models::SessionRecord;
use crate::utils::time::now_local;
use chrono::NaiveDateTime;

/// What a clock action did, for the frontend to turn into status text.
/// Invalid transitions are user feedback, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockOutcome {
    /// Session started at the given time.
    Started(NaiveDateTime),
    /// `clock_in` while already active: nothing happened.
    AlreadyActive,
    /// Session ended. `persisted` is false when the store failed; the
    /// running total only advanced when it is true.
    Ended {
        duration_minutes: i64,
        persisted: bool,
    },
    /// `clock_out` while idle: nothing happened.
    NotActive,
}

pub struct SessionTracker {
    store: SessionStore,
    clock_in_time: Option<NaiveDateTime>,
    total_minutes: i64,
    observers: Vec<Box<dyn TrackerObserver>>,
}

impl SessionTracker {
    /// Build a tracker over an owned store. The running total is recomputed
    /// from storage, so a fresh process picks up where the last one left off.
    pub fn new(store: SessionStore) -> AppResult<Self> {
        let total_minutes = store.sum_duration()?.unwrap_or(0);
        Ok(Self {
            store,
            clock_in_time: None,
            total_minutes,
            observers: Vec::new(),
        })
    }

    pub fn subscribe(&mut self, observer: Box<dyn TrackerObserver>) {
        self.observers.push(observer);
    }

    fn notify(&mut self, event: TrackerEvent) {
        for obs in &mut self.observers {
            obs.on_event(&event);
        }
    }

    pub fn is_active(&self) -> bool {
        self.clock_in_time.is_some()
    }

    pub fn clock_in_time(&self) -> Option<NaiveDateTime> {
        self.clock_in_time
    }

    /// Running total in minutes, advanced only by persisted sessions.
    pub fn total_minutes(&self) -> i64 {
        self.total_minutes
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Start a session now.
    pub fn clock_in(&mut self) -> ClockOutcome {
        self.clock_in_at(now_local())
    }

    /// Start a session at an explicit timestamp.
    pub fn clock_in_at(&mut self, now: NaiveDateTime) -> ClockOutcome {
        if self.clock_in_time.is_some() {
            return ClockOutcome::AlreadyActive;
        }

        self.clock_in_time = Some(now);
        self.notify(TrackerEvent::SessionStarted { at: now });
        ClockOutcome::Started(now)
    }

    /// End the session now.
    pub fn clock_out(&mut self) -> ClockOutcome {
        self.clock_out_at(now_local())
    }

    /// End the session at an explicit timestamp.
    ///
    /// The tracker goes back to idle whether or not the store accepted the
    /// record; a storage failure must not leave the frontend stuck in an
    /// active session. The running total only advances on a successful
    /// persist.
    pub fn clock_out_at(&mut self, now: NaiveDateTime) -> ClockOutcome {
        let Some(clock_in_time) = self.clock_in_time.take() else {
            return ClockOutcome::NotActive;
        };

        let rec = SessionRecord::finished(clock_in_time, now, "");
        let duration_minutes = rec.duration_minutes;

        let persisted = self.store.insert(&rec).is_ok();
        if persisted {
            self.total_minutes += duration_minutes;
        }

        self.notify(TrackerEvent::SessionEnded {
            duration_minutes,
            persisted,
        });
        if persisted {
            self.notify(TrackerEvent::TotalsUpdated {
                total_minutes: self.total_minutes,
            });
        }

        ClockOutcome::Ended {
            duration_minutes,
            persisted,
        }
    }

    /// Wipe all records and zero the running total.
    ///
    /// Confirmation is the caller's job. An active session is discarded
    /// without being persisted, which is why the confirmation copy warns
    /// about it.
    pub fn reset(&mut self) -> AppResult<usize> {
        let n = self.store.delete_all()?;
        self.total_minutes = 0;
        self.clock_in_time = None;
        self.notify(TrackerEvent::Reset);
        self.notify(TrackerEvent::TotalsUpdated { total_minutes: 0 });
        Ok(n)
    }

    /// Seconds elapsed in the active session, `None` when idle. Pure read,
    /// used by the periodic elapsed-time refresh.
    pub fn elapsed_seconds_at(&self, now: NaiveDateTime) -> Option<i64> {
        self.clock_in_time.map(|t| (now - t).num_seconds())
    }
}
