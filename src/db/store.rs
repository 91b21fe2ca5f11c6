//! The session store: an explicitly owned handle over the `sessions` table.
//!
//! The tracker holds one of these; nothing else touches the connection.

use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::SessionRecord;
use chrono::NaiveDateTime;

pub struct SessionStore {
    pool: DbPool,
}

impl SessionStore {
    /// Open (and if needed initialize) the store at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    /// Append one immutable session record.
    pub fn insert(&self, rec: &SessionRecord) -> AppResult<()> {
        queries::insert_session(&self.pool.conn, rec)?;

        // Internal log is best-effort; a failed log line must not fail the insert.
        let _ = ttlog(
            &self.pool.conn,
            "session_recorded",
            "sessions",
            &format!(
                "Session recorded: {} to {}, {} minutes",
                rec.clock_in, rec.clock_out, rec.duration_minutes
            ),
        );
        Ok(())
    }

    /// Remove all session records. Returns the number of deleted rows.
    pub fn delete_all(&self) -> AppResult<usize> {
        let n = queries::delete_all_sessions(&self.pool.conn)?;
        let _ = ttlog(
            &self.pool.conn,
            "reset",
            "sessions",
            &format!("All sessions deleted ({} rows)", n),
        );
        Ok(n)
    }

    /// `(clock_in, duration_minutes)` pairs ascending by clock_in.
    pub fn read_all_ordered_by_clock_in(&self) -> AppResult<Vec<(NaiveDateTime, i64)>> {
        queries::load_sessions_ordered(&self.pool.conn)
    }

    /// Full records ascending by clock_in.
    pub fn read_all(&self) -> AppResult<Vec<SessionRecord>> {
        queries::load_all_sessions(&self.pool.conn)
    }

    /// Total minutes across all records, `None` when empty.
    pub fn sum_duration(&self) -> AppResult<Option<i64>> {
        queries::sum_duration(&self.pool.conn)
    }
}
