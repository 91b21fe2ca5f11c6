//! Session store round trips over a real SQLite file.

mod common;
use common::{record_session, setup_test_db, ts};

use lockin::db::SessionStore;
use lockin::models::SessionRecord;

#[test]
fn test_insert_then_read_round_trip() {
    let db_path = setup_test_db("store_round_trip");
    let store = SessionStore::open(&db_path).expect("open store");

    let rec = SessionRecord::finished(ts("2024-01-01T09:00:00"), ts("2024-01-01T09:30:00"), "");
    assert_eq!(rec.duration_minutes, 30);
    store.insert(&rec).expect("insert");

    let back = store.read_all().expect("read all");
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].clock_in, ts("2024-01-01T09:00:00"));
    assert_eq!(back[0].clock_out, ts("2024-01-01T09:30:00"));
    assert_eq!(back[0].duration_minutes, 30);
}

#[test]
fn test_fractional_second_timestamps_read_back() {
    // The original widget stored full-precision isoformat() timestamps.
    let db_path = setup_test_db("store_fractional");
    let store = SessionStore::open(&db_path).expect("open store");

    store
        .insert(&SessionRecord::finished(
            ts("2024-03-04T09:00:00.123456"),
            ts("2024-03-04T09:20:00.654321"),
            "",
        ))
        .expect("insert");

    let back = store.read_all().expect("read all");
    assert_eq!(back[0].clock_in, ts("2024-03-04T09:00:00.123456"));
    assert_eq!(back[0].duration_minutes, 20);
}

#[test]
fn test_read_all_ordered_ascending_by_clock_in() {
    let db_path = setup_test_db("store_ordered");

    record_session(&db_path, "2024-01-10T09:00:00", "2024-01-10T10:00:00");
    record_session(&db_path, "2024-01-01T09:00:00", "2024-01-01T09:30:00");
    record_session(&db_path, "2024-01-05T09:00:00", "2024-01-05T09:45:00");

    let store = SessionStore::open(&db_path).expect("open store");
    let rows = store.read_all_ordered_by_clock_in().expect("read pairs");

    let clock_ins: Vec<_> = rows.iter().map(|(ci, _)| *ci).collect();
    assert_eq!(
        clock_ins,
        vec![
            ts("2024-01-01T09:00:00"),
            ts("2024-01-05T09:00:00"),
            ts("2024-01-10T09:00:00"),
        ]
    );
    assert_eq!(
        rows.iter().map(|(_, d)| *d).collect::<Vec<_>>(),
        vec![30, 45, 60]
    );
}

#[test]
fn test_sum_duration_none_when_empty_then_totals() {
    let db_path = setup_test_db("store_sum");
    let store = SessionStore::open(&db_path).expect("open store");

    assert_eq!(store.sum_duration().expect("sum"), None);

    record_session(&db_path, "2024-01-01T09:00:00", "2024-01-01T09:30:00");
    record_session(&db_path, "2024-01-02T09:00:00", "2024-01-02T10:30:00");

    assert_eq!(store.sum_duration().expect("sum"), Some(120));
}

#[test]
fn test_delete_all_empties_the_store() {
    let db_path = setup_test_db("store_delete_all");

    record_session(&db_path, "2024-01-01T09:00:00", "2024-01-01T09:30:00");
    record_session(&db_path, "2024-01-02T09:00:00", "2024-01-02T09:30:00");

    let store = SessionStore::open(&db_path).expect("open store");
    assert_eq!(store.delete_all().expect("delete"), 2);
    assert_eq!(store.sum_duration().expect("sum"), None);
    assert!(store.read_all().expect("read").is_empty());
}
