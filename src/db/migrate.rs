use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension};

/// A schema step, applied once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250601_0001_create_flights",
        description: "Created flights table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS flights (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            duration    REAL NOT NULL CHECK(duration > 0),
            project     TEXT NOT NULL DEFAULT '',
            pilot       TEXT NOT NULL,
            drone       TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250615_0002_flights_group_indexes",
        description: "Added pilot/drone/date indexes to flights",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_flights_pilot ON flights(pilot);
        CREATE INDEX IF NOT EXISTS idx_flights_drone ON flights(drone);
        CREATE INDEX IF NOT EXISTS idx_flights_date  ON flights(date);
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
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
    )
}

fn flights_table_exists(conn: &Connection) -> rusqlite::Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='flights'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Path of the main database file, empty for in-memory databases.
fn database_path(conn: &Connection) -> String {
    conn.query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
        .unwrap_or_default()
}

/// Migrations that have not been recorded yet.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut pending = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            pending.push(m.version);
        }
    }
    Ok(pending)
}

/// Public entry point: run all pending migrations.
/// Returns how many migrations were applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    let pending = pending_migrations(conn)?;
    if pending.is_empty() {
        return Ok(0);
    }

    // Upgrading a database that already holds flights: keep a copy first
    if flights_table_exists(conn)? {
        let db_path = database_path(conn);
        if db_path.is_empty() {
            warning("Could not determine DB path, backup skipped.");
        } else {
            let backup = crate::core::backup::backup_before_migration(&db_path)?;
            success(format!("📦 Backup created: {}", backup.display()));
        }
    }

    let mut applied = 0;
    for m in MIGRATIONS.iter().filter(|m| pending.contains(&m.version)) {
        conn.execute_batch(&format!("BEGIN;\n{}\nCOMMIT;", m.sql))
            .map_err(|e| {
                let _ = conn.execute_batch("ROLLBACK;");
                AppError::Migration(format!("{}: {}", m.version, e))
            })?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
            [m.version, m.description],
        )?;

        applied += 1;
    }

    Ok(applied)
}
