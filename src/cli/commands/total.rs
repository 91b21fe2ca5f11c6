use crate::config::Config;
use crate::db::SessionStore;
use crate::errors::AppResult;
use crate::utils::formatting::minutes_to_readable;

/// Print the total hours worked across all recorded sessions.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = SessionStore::open(&cfg.database)?;
    let total_minutes = store.sum_duration()?.unwrap_or(0);

    println!("Total hours worked: {}", minutes_to_readable(total_minutes));
    Ok(())
}
