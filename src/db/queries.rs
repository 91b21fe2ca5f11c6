use crate::errors::{AppError, AppResult};
use crate::models::SessionRecord;
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<SessionRecord> {
    let in_str: String = row.get("clock_in")?;
    let out_str: String = row.get("clock_out")?;

    let clock_in = parse_timestamp(&in_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(in_str.clone())),
        )
    })?;

    let clock_out = parse_timestamp(&out_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(out_str.clone())),
        )
    })?;

    Ok(SessionRecord {
        id: row.get("id")?,
        clock_in,
        clock_out,
        duration_minutes: row.get("duration_minutes")?,
        // notes is nullable in the legacy schema
        notes: row.get::<_, Option<String>>("notes")?.unwrap_or_default(),
    })
}

/// Full records ascending by clock_in.
pub fn load_all_sessions(conn: &Connection) -> AppResult<Vec<SessionRecord>> {
    let mut stmt = conn.prepare("SELECT * FROM sessions ORDER BY clock_in ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_session(conn: &Connection, rec: &SessionRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO sessions (clock_in, clock_out, duration_minutes, notes)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            format_timestamp(rec.clock_in),
            format_timestamp(rec.clock_out),
            rec.duration_minutes,
            rec.notes,
        ],
    )?;
    Ok(())
}

pub fn delete_all_sessions(conn: &Connection) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM sessions", [])?;
    Ok(n)
}

/// `(clock_in, duration_minutes)` pairs ascending by clock_in.
/// This is all the weekly aggregation needs.
pub fn load_sessions_ordered(conn: &Connection) -> AppResult<Vec<(NaiveDateTime, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT clock_in, duration_minutes FROM sessions
         ORDER BY clock_in ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        let in_str: String = row.get(0)?;
        let clock_in = parse_timestamp(&in_str).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTimestamp(in_str.clone())),
            )
        })?;
        Ok((clock_in, row.get::<_, i64>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Total minutes across all sessions, `None` when the table is empty.
pub fn sum_duration(conn: &Connection) -> AppResult<Option<i64>> {
    let total: Option<i64> = conn
        .query_row("SELECT SUM(duration_minutes) FROM sessions", [], |row| {
            row.get(0)
        })
        .optional()?
        .flatten();
    Ok(total)
}
