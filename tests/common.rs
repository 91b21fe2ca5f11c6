#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use lockin::db::SessionStore;
use lockin::models::SessionRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lk() -> Command {
    cargo_bin_cmd!("lockin")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_lockin.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

pub fn ts(s: &str) -> NaiveDateTime {
    s.parse().expect("valid timestamp")
}

/// Record a finished session directly via the library store API.
pub fn record_session(db_path: &str, clock_in: &str, clock_out: &str) {
    let store = SessionStore::open(db_path).expect("open store");
    store
        .insert(&SessionRecord::finished(ts(clock_in), ts(clock_out), ""))
        .expect("insert session");
}
