use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring a freshly opened connection up to the current schema.
///
/// The migration engine owns every piece of schema, from the legacy
/// `sessions` table to the internal log; callers never create tables
/// themselves.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}
