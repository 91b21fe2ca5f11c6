use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::SessionStore;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};
use crate::ui::prompt::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        // A tracking view running elsewhere keeps its active session in
        // memory only, so a reset would discard it unrecorded. The prompt
        // says so.
        let prompt = "Reset all recorded hours? Any session still running is \
                      discarded without being saved. This action is irreversible.";

        if !*yes && !ask_confirmation(prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = SessionStore::open(&cfg.database)?;
        match store.delete_all() {
            Ok(n) => {
                success(format!("All hours reset ({} sessions deleted).", n));
            }
            Err(e) => {
                // A storage failure is surfaced as status text; the records
                // are still there and nothing is in a half-done state.
                error(format!("Error resetting hours! ({})", e));
            }
        }
    }

    Ok(())
}
