//! Weekly aggregation and duration formatting.

mod common;
use common::ts;

use lockin::core::summary::weekly_minutes;
use lockin::utils::formatting::minutes_to_readable;
use lockin::utils::time::week_key;

#[test]
fn test_same_iso_week_sums_into_one_bucket() {
    let rows = vec![
        (ts("2024-01-01T09:00:00"), 30), // Monday of 2024-W01
        (ts("2024-01-05T20:00:00"), 90), // Friday, same week
    ];

    let weeks = weekly_minutes(&rows);
    assert_eq!(weeks, vec![("2024-W01".to_string(), 120)]);
}

#[test]
fn test_different_weeks_bucket_separately_in_ascending_order() {
    // Deliberately inserted out of order; keys must come back ascending.
    let rows = vec![
        (ts("2024-02-14T10:00:00"), 45), // 2024-W07
        (ts("2024-01-02T10:00:00"), 30), // 2024-W01
        (ts("2024-01-10T10:00:00"), 60), // 2024-W02
    ];

    let weeks = weekly_minutes(&rows);
    assert_eq!(
        weeks,
        vec![
            ("2024-W01".to_string(), 30),
            ("2024-W02".to_string(), 60),
            ("2024-W07".to_string(), 45),
        ]
    );
}

#[test]
fn test_week_key_uses_iso_week_year_at_boundaries() {
    // Dec 31 2024 falls in week 1 of ISO year 2025.
    assert_eq!(week_key(ts("2024-12-31T10:00:00")), "2025-W01");
    // Jan 1 2021 falls in week 53 of ISO year 2020.
    assert_eq!(week_key(ts("2021-01-01T10:00:00")), "2020-W53");
    // Zero-padded single-digit weeks keep keys lexicographically sortable.
    assert_eq!(week_key(ts("2024-02-14T10:00:00")), "2024-W07");
}

#[test]
fn test_empty_input_produces_no_buckets() {
    assert!(weekly_minutes(&[]).is_empty());
}

#[test]
fn test_minutes_to_readable_formatting_rules() {
    assert_eq!(minutes_to_readable(0), "0 minutes");
    assert_eq!(minutes_to_readable(1), "1 minute");
    assert_eq!(minutes_to_readable(30), "30 minutes");
    assert_eq!(minutes_to_readable(60), "1 hour");
    assert_eq!(minutes_to_readable(61), "1 hour 1 minute");
    // Exactly whole hours suppress the minutes term.
    assert_eq!(minutes_to_readable(120), "2 hours");
    assert_eq!(minutes_to_readable(125), "2 hours 5 minutes");
}
