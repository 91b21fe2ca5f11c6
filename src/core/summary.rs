//! Weekly aggregation of persisted sessions.

use crate::utils::time::week_key;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Bucket `(clock_in, duration_minutes)` pairs by ISO year-week key.
///
/// A session belongs to the week its clock-in falls in, even when it runs
/// past midnight into the next week. Keys come back in ascending order
/// ("2023-W52" sorts before "2024-W01" lexicographically, since the year
/// comes first and the week is zero-padded).
pub fn weekly_minutes(rows: &[(NaiveDateTime, i64)]) -> Vec<(String, i64)> {
    let mut buckets: BTreeMap<String, i64> = BTreeMap::new();

    for (clock_in, duration_minutes) in rows {
        *buckets.entry(week_key(*clock_in)).or_insert(0) += duration_minutes;
    }

    buckets.into_iter().collect()
}
