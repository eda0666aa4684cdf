#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DAY: i64 = 86_400_000;

/// 2023-11-14T22:13:20Z
pub const T0: i64 = 1_700_000_000_000;

pub fn dogcare() -> Command {
    cargo_bin_cmd!("dogcare")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dogcare.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh empty directory inside tempdir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dogcare_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

pub fn init_db(db_path: &str) {
    dogcare()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and record three waters and one incident at fixed times.
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    for ts in [T0 - 2 * DAY, T0 - DAY, T0] {
        dogcare()
            .args(["--db", db_path, "--test", "water", "--at", &ts.to_string()])
            .assert()
            .success();
    }

    dogcare()
        .args(["--db", db_path, "--test", "incident", "--at", &(T0 - DAY / 2).to_string()])
        .assert()
        .success();
}
