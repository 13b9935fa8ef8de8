use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{dl, dl_db, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    dl_db(&db_path)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list() {
    let db_path = setup_test_db("add_and_list");
    dl_db(&db_path).arg("init").assert().success();

    dl_db(&db_path)
        .args([
            "add", "--date", "2025-06-02", "--start", "10:00", "--end", "11:30", "--project",
            "P-100", "--pilot", "Joao Scotti", "--drone", "DJI Mini 2",
        ])
        .assert()
        .success()
        .stdout(contains("Duration: 1.50 hours"));

    dl_db(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2025-06-02"))
        .stdout(contains("10:00:00"))
        .stdout(contains("11:30:00"))
        .stdout(contains("Joao Scotti"))
        .stdout(contains("DJI Mini 2"))
        .stdout(contains("1 flight(s), 1.50 h"));
}

#[test]
fn test_add_defaults_to_today_and_config_window() {
    let db_path = setup_test_db("add_defaults");
    dl_db(&db_path).arg("init").assert().success();

    dl_db(&db_path)
        .args(["add", "--pilot", "Michael Lloyd", "--drone", "DJI Mini 2"])
        .assert()
        .success()
        .stdout(contains("Duration: 1.00 hours"));

    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    dl_db(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(contains(today))
        .stdout(contains("10:00:00"))
        .stdout(contains("11:00:00"));
}

#[test]
fn test_add_rejects_end_before_start() {
    let db_path = setup_test_db("add_rejects_window");
    dl_db(&db_path).arg("init").assert().success();

    dl_db(&db_path)
        .args([
            "add", "--date", "2025-06-02", "--start", "11:00", "--end", "10:00", "--pilot",
            "Joao Scotti", "--drone", "DJI Mini 2",
        ])
        .assert()
        .failure()
        .stderr(contains("End time must be later than start time"));

    dl_db(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No flights logged"));
}

#[test]
fn test_add_rejects_unknown_pilot_and_bad_input() {
    let db_path = setup_test_db("add_rejects_input");
    dl_db(&db_path).arg("init").assert().success();

    dl_db(&db_path)
        .args(["add", "--pilot", "Nobody", "--drone", "DJI Mini 2"])
        .assert()
        .failure()
        .stderr(contains("Unknown pilot 'Nobody'"));

    dl_db(&db_path)
        .args(["add", "--pilot", "Joao Scotti", "--drone", "Parrot"])
        .assert()
        .failure()
        .stderr(contains("Unknown drone 'Parrot'"));

    dl_db(&db_path)
        .args([
            "add", "--start", "25:00", "--pilot", "Joao Scotti", "--drone", "DJI Mini 2",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    dl_db(&db_path)
        .args([
            "add", "--date", "02/06/2025", "--pilot", "Joao Scotti", "--drone", "DJI Mini 2",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_list_filters() {
    let db_path = setup_test_db("list_filters");
    init_db_with_data(&db_path);

    dl_db(&db_path)
        .args(["list", "--range", "2025-07"])
        .assert()
        .success()
        .stdout(contains("2025-07-01"))
        .stdout(contains("2025-06-02").not());

    dl_db(&db_path)
        .args(["list", "--pilot", "Arnold Hoyer"])
        .assert()
        .success()
        .stdout(contains("2025-06-10"))
        .stdout(contains("Joao Scotti").not());

    dl_db(&db_path)
        .args(["list", "--range", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}

#[test]
fn test_delete_flight() {
    let db_path = setup_test_db("delete_flight");
    init_db_with_data(&db_path);

    dl_db(&db_path)
        .args(["del", "--id", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Flight #1 deleted (1.50 h removed)"));

    dl_db(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2025-06-02").not())
        .stdout(contains("2 flight(s), 1.75 h"));

    dl_db(&db_path)
        .args(["del", "--id", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No flight found with id 1"));
}

#[test]
fn test_delete_cancelled_keeps_flight() {
    let db_path = setup_test_db("delete_cancelled");
    init_db_with_data(&db_path);

    dl_db(&db_path)
        .args(["del", "--id", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    dl_db(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("2025-06-10"));
}

#[test]
fn test_stats() {
    let db_path = setup_test_db("stats");
    init_db_with_data(&db_path);

    dl_db(&db_path)
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("Total flight hours per pilot"))
        .stdout(contains("Total flight hours per drone"))
        .stdout(contains("Joao Scotti"))
        .stdout(contains("2.25"))
        .stdout(contains("DJI Mini 2"))
        .stdout(contains("2.50"))
        .stdout(contains("Total: 3 flights, 3.25 h (03h 15m)"));

    dl_db(&db_path)
        .args(["stats", "--range", "2025-06-01:2025-06-05"])
        .assert()
        .success()
        .stdout(contains("Total: 1 flight, 1.50 h"));
}

#[test]
fn test_stats_on_empty_database() {
    let db_path = setup_test_db("stats_empty");
    dl_db(&db_path).arg("init").assert().success();

    dl_db(&db_path)
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("No flights logged"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_db_with_data(&db_path);

    dl_db(&db_path)
        .args(["del", "--id", "3", "--yes"])
        .assert()
        .success();

    dl_db(&db_path)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("flight #1"))
        .stdout(contains("flight #3"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup");
    init_db_with_data(&db_path);

    let plain = temp_out("backup_plain", "sqlite");
    dl_db(&db_path)
        .args(["backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(fs::metadata(&plain).unwrap().len() > 0);

    let target = temp_out("backup_zip", "sqlite");
    let zipped = Path::new(&target).with_extension("zip");
    fs::remove_file(&zipped).ok();

    dl_db(&db_path)
        .args(["backup", "--file", &target, "--compress", "--force"])
        .assert()
        .success()
        .stdout(contains("Compressed backup created"));

    let bytes = fs::read(&zipped).unwrap();
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    dl_db(&db_path)
        .args(["db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total flights:"))
        .stdout(contains("2025-06-02"))
        .stdout(contains("2025-07-01"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_config_fleet_lists_defaults() {
    dl()
        .args(["--test", "config", "--fleet", "--check"])
        .assert()
        .success()
        .stdout(contains("Aleksandra Kruszewska"))
        .stdout(contains("DJI Mavic 3 Enterprise"))
        .stdout(contains("Configuration OK: 5 pilot(s), 4 drone(s)"));
}

#[test]
fn test_add_with_seconds_keeps_exact_times() {
    let db_path = setup_test_db("add_with_seconds");
    dl_db(&db_path).arg("init").assert().success();

    dl_db(&db_path)
        .args([
            "add", "--date", "2025-06-02", "--start", "10:00:15", "--end", "10:30:45", "--pilot",
            "Joao Scotti", "--drone", "DJI Mini 2",
        ])
        .assert()
        .success()
        .stdout(contains("Duration: 0.51 hours"));

    dl_db(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("10:00:15"))
        .stdout(contains("10:30:45"))
        .stdout(contains("1 flight(s), 0.51 h"));
}

#[test]
fn test_list_reports_when_filters_match_nothing() {
    let db_path = setup_test_db("list_filters_empty");
    init_db_with_data(&db_path);

    dl_db(&db_path)
        .args(["list", "--pilot", "Michael Lloyd"])
        .assert()
        .success()
        .stdout(contains("No flights match the selected filters"))
        .stdout(contains("No flights logged").not());

    dl_db(&db_path)
        .args(["list", "--range", "2024"])
        .assert()
        .success()
        .stdout(contains("No flights match the selected filters"));
}

#[test]
fn test_backup_onto_database_is_refused() {
    let db_path = setup_test_db("backup_onto_db");
    init_db_with_data(&db_path);
    let size_before = fs::metadata(&db_path).unwrap().len();

    dl_db(&db_path)
        .args(["backup", "--file", &db_path, "--force"])
        .assert()
        .failure()
        .stderr(contains("Backup destination is the database itself"));

    assert_eq!(fs::metadata(&db_path).unwrap().len(), size_before);
    dl_db(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("3 flight(s), 3.25 h"));
}

#[test]
fn test_db_migrate_reports_applied_count() {
    let db_path = setup_test_db("db_migrate_count");
    init_db_with_data(&db_path);

    dl_db(&db_path)
        .args(["db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed (0 pending applied)"));

    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "DELETE FROM log
               WHERE operation = 'migration_applied'
                 AND target = '20250615_0002_flights_group_indexes';
             DROP INDEX IF EXISTS idx_flights_pilot;
             DROP INDEX IF EXISTS idx_flights_drone;
             DROP INDEX IF EXISTS idx_flights_date;",
        )
        .unwrap();
    }

    dl_db(&db_path)
        .args(["db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed (1 pending applied)"));

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let indexes: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_flights_%'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(indexes, 3);
}
