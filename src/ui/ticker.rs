//! Periodic elapsed-time repaint for the tracking view.
//!
//! The original widget rescheduled a canvas callback every second while a
//! session was active. Here that is a small background thread repainting one
//! line, with a channel as the cancel signal so `stop()` returns promptly.
//! The ticker only reads the clock-in time; all state lives in the tracker.

use crate::utils::formatting::seconds_to_clock;
use crate::utils::time::now_local;
use chrono::NaiveDateTime;
use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub struct Ticker {
    cancel: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start repainting the active-session line every `period`.
    pub fn start(clock_in: NaiveDateTime, period: Duration) -> Self {
        let (cancel, cancelled) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                let elapsed = (now_local() - clock_in).num_seconds();
                print!("\r⏱  Active session: {}  ", seconds_to_clock(elapsed));
                let _ = io::stdout().flush();

                match cancelled.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    // cancelled, or the sender side is gone
                    _ => break,
                }
            }
            println!();
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Cancel the repaint loop and wait for the thread to finish.
    pub fn stop(&mut self) {
        let _ = self.cancel.send(());
        if let Some(h) = self.handle.take() {
            let _ = h.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
