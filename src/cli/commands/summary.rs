use crate::config::Config;
use crate::core::summary::weekly_minutes;
use crate::db::SessionStore;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::minutes_to_readable;

/// Print hours worked per ISO week, ascending by week key.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = SessionStore::open(&cfg.database)?;
    let rows = store.read_all_ordered_by_clock_in()?;

    header("Weekly Study Summary");

    let weeks = weekly_minutes(&rows);
    if weeks.is_empty() {
        println!("Nothing's here...");
        return Ok(());
    }

    for (week, minutes) in weeks {
        println!("{}: {}", week, minutes_to_readable(minutes));
    }

    Ok(())
}
