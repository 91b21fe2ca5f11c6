//! The interactive tracking view: the terminal stand-in for the original
//! widget's main page. Reads one command per line; while a session is active
//! and the summary view is not shown, a ticker repaints the elapsed time.

use crate::config::Config;
use crate::core::summary::weekly_minutes;
use crate::core::tracker::{ClockOutcome, SessionTracker};
use crate::core::{TrackerEvent, TrackerObserver};
use crate::db::SessionStore;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info, success};
use crate::ui::prompt::ask_confirmation;
use crate::ui::ticker::Ticker;
use crate::utils::formatting::minutes_to_readable;

use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Display surface: turns tracker events into status lines.
struct StatusDisplay;

impl TrackerObserver for StatusDisplay {
    fn on_event(&mut self, event: &TrackerEvent) {
        match event {
            TrackerEvent::SessionStarted { at } => {
                success(format!("Clocked in at: {}", at.format("%I:%M %p")));
            }
            TrackerEvent::SessionEnded {
                duration_minutes,
                persisted,
            } => {
                if *persisted {
                    success(format!(
                        "Clocked out: {} recorded",
                        minutes_to_readable(*duration_minutes)
                    ));
                } else {
                    error("Session could not be saved; total unchanged.");
                }
            }
            TrackerEvent::TotalsUpdated { total_minutes } => {
                println!("Total hours worked: {}", minutes_to_readable(*total_minutes));
            }
            TrackerEvent::Reset => {
                success("All hours reset!");
            }
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  in        clock in (start a session)");
    println!("  out       clock out (end the session and record it)");
    println!("  total     show total hours worked");
    println!("  summary   show hours per ISO week");
    println!("  back      leave the summary view");
    println!("  reset     delete all recorded sessions");
    println!("  quit      exit the tracking view");
}

fn print_summary_view(tracker: &SessionTracker) -> AppResult<()> {
    header("Weekly Study Summary");

    let rows = tracker.store().read_all_ordered_by_clock_in()?;
    let weeks = weekly_minutes(&rows);
    if weeks.is_empty() {
        println!("Nothing's here...");
    } else {
        for (week, minutes) in weeks {
            println!("{}: {}", week, minutes_to_readable(minutes));
        }
    }
    Ok(())
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = SessionStore::open(&cfg.database)?;
    let mut tracker = SessionTracker::new(store)?;
    tracker.subscribe(Box::new(StatusDisplay));

    let refresh = Duration::from_secs(cfg.refresh_secs.max(1));

    header("LOCK IN CLOCK IN");
    println!("Not clocked in");
    println!(
        "Total hours worked: {}",
        minutes_to_readable(tracker.total_minutes())
    );
    println!("Type 'help' for commands.");

    // The elapsed-time repaint runs only while a session is active AND the
    // summary view is not shown. Guard both here; the ticker itself is dumb.
    let mut ticker: Option<Ticker> = None;
    let mut summary_mode = false;

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF behaves like quit
        }

        match line.trim().to_lowercase().as_str() {
            "in" | "clock in" => {
                match tracker.clock_in() {
                    ClockOutcome::AlreadyActive => info("You are already clocked in!"),
                    ClockOutcome::Started(at) => {
                        if !summary_mode {
                            ticker = Some(Ticker::start(at, refresh));
                        }
                    }
                    _ => {}
                }
            }
            "out" | "clock out" => {
                // Stop repainting before the outcome lines are printed.
                if let Some(mut t) = ticker.take() {
                    t.stop();
                }
                if tracker.clock_out() == ClockOutcome::NotActive {
                    info("You need to clock in first!");
                }
            }
            "total" | "status" => {
                println!(
                    "Total hours worked: {}",
                    minutes_to_readable(tracker.total_minutes())
                );
            }
            "summary" => {
                if let Some(mut t) = ticker.take() {
                    t.stop();
                }
                summary_mode = true;
                print_summary_view(&tracker)?;
            }
            "back" => {
                summary_mode = false;
                if let Some(at) = tracker.clock_in_time() {
                    ticker = Some(Ticker::start(at, refresh));
                }
            }
            "reset" => {
                let prompt = if tracker.is_active() {
                    "Reset all hours? The session you are in right now is \
                     discarded without being saved. This cannot be undone."
                } else {
                    "Are you sure you want to reset all hours? This cannot be undone."
                };
                if ask_confirmation(prompt) {
                    if let Some(mut t) = ticker.take() {
                        t.stop();
                    }
                    if let Err(e) = tracker.reset() {
                        error(format!("Error resetting hours! ({})", e));
                    }
                }
            }
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,
            "" => {}
            other => {
                info(format!("Unknown command '{}'. Type 'help'.", other));
            }
        }
    }

    // Shutdown: cancel the repaint loop; an active session is in memory only
    // and ends unrecorded, exactly like closing the original widget.
    if let Some(mut t) = ticker.take() {
        t.stop();
    }
    if tracker.is_active() {
        info("Left with a session still running; it was not recorded.");
    }

    Ok(())
}
