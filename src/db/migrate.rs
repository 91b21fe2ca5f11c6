use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `sessions` table exists.
fn sessions_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='sessions'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `sessions` table.
///
/// Column names and types are a compatibility surface: databases written by
/// the original desktop widget must keep working unchanged.
fn create_sessions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            clock_in         TEXT NOT NULL,
            clock_out        TEXT NOT NULL,
            duration_minutes INTEGER NOT NULL,
            notes            TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_clock_in ON sessions(clock_in);
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Internal log table first, so migrations can be recorded
    ensure_log_table(conn)?;

    // 2) Sessions table
    if !sessions_table_exists(conn)? {
        create_sessions_table(conn)?;
        success("Created sessions table.");

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', 'sessions', 'Created sessions table')",
            [],
        )?;
    } else {
        // Pre-existing DB (possibly from the old widget): just make sure the
        // ordered-read index is there.
        conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS idx_sessions_clock_in ON sessions(clock_in);",
        )?;
    }

    Ok(())
}
