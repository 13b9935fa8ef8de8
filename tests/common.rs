#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use dronelog::config::Config;
use dronelog::core::add::{AddLogic, FlightForm};
use dronelog::db::pool::DbPool;
use dronelog::models::Flight;
use chrono::{NaiveDate, NaiveTime};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dl() -> Command {
    cargo_bin_cmd!("dronelog")
}

/// Binary bound to a test database, never touching the user's config.
pub fn dl_db(db_path: &str) -> Command {
    let mut cmd = dl();
    cmd.args(["--db", db_path, "--test"]);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dronelog.sqlite", name));
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

/// Initialize DB and log a small dataset useful for many tests:
///
/// | date       | window      | hours | pilot        | drone                   |
/// |------------|-------------|-------|--------------|-------------------------|
/// | 2025-06-02 | 10:00-11:30 | 1.50  | Joao Scotti  | DJI Mini 2              |
/// | 2025-06-10 | 09:00-10:00 | 1.00  | Arnold Hoyer | DJI Mini 2              |
/// | 2025-07-01 | 14:00-14:45 | 0.75  | Joao Scotti  | DJI Mavic 3 Enterprise  |
pub fn init_db_with_data(db_path: &str) {
    dl_db(db_path).arg("init").assert().success();

    for (date, start, end, pilot, drone) in [
        ("2025-06-02", "10:00", "11:30", "Joao Scotti", "DJI Mini 2"),
        ("2025-06-10", "09:00", "10:00", "Arnold Hoyer", "DJI Mini 2"),
        ("2025-07-01", "14:00", "14:45", "Joao Scotti", "DJI Mavic 3 Enterprise"),
    ] {
        dl_db(db_path)
            .args([
                "add", "--date", date, "--start", start, "--end", end, "--project", "P-100",
                "--pilot", pilot, "--drone", drone,
            ])
            .assert()
            .success();
    }
}

pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid test time")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn form(d: &str, start: &str, end: &str, pilot: &str, drone: &str) -> FlightForm {
    FlightForm {
        date: date(d),
        start: time(start),
        end: time(end),
        project: "P-100".to_string(),
        pilot: pilot.to_string(),
        drone: drone.to_string(),
    }
}

/// Store a flight through the same path the `add` command uses.
pub fn add_flight(pool: &mut DbPool, d: &str, start: &str, end: &str, pilot: &str, drone: &str) -> Flight {
    AddLogic::apply(pool, &Config::default(), &form(d, start, end, pilot, drone))
        .expect("add flight")
}
