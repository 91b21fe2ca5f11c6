pub mod events;
pub mod summary;
pub mod tracker;

pub use events::{TrackerEvent, TrackerObserver};
pub use tracker::{ClockOutcome, SessionTracker};
