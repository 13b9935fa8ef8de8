//! Aggregation queries over the `flights` table and database statistics.

use crate::errors::AppResult;
use crate::models::{FlightStats, GroupBy, GroupTotal};
use crate::utils::date::format_db_date;
use crate::utils::time::round_hours;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, ToSql};
use std::fs;

/// WHERE clause and its parameters for an optional date range.
fn range_filter(bounds: &Option<(NaiveDate, NaiveDate)>) -> (&'static str, Vec<String>) {
    match bounds {
        None => ("", Vec::new()),
        Some((from, to)) => (
            " WHERE date BETWEEN ?1 AND ?2",
            vec![format_db_date(from), format_db_date(to)],
        ),
    }
}

/// `SELECT key, SUM(duration), COUNT(*) ... GROUP BY key`, sorted by key.
pub fn totals_by(
    conn: &Connection,
    group: GroupBy,
    bounds: &Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<GroupTotal>> {
    let col = group.column();
    let (filter, args) = range_filter(bounds);

    let sql = format!(
        "SELECT {col}, SUM(duration), COUNT(*)
         FROM flights{filter}
         GROUP BY {col}
         ORDER BY {col} ASC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let params: Vec<&dyn ToSql> = args.iter().map(|s| s as &dyn ToSql).collect();

    let rows = stmt.query_map(params.as_slice(), |row| {
        Ok(GroupTotal {
            key: row.get(0)?,
            hours: round_hours(row.get::<_, f64>(1)?),
            flights: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Total hours and number of flights, optionally restricted to a range.
pub fn overall_totals(
    conn: &Connection,
    bounds: &Option<(NaiveDate, NaiveDate)>,
) -> AppResult<(f64, i64)> {
    let (filter, args) = range_filter(bounds);
    let sql = format!("SELECT IFNULL(SUM(duration), 0.0), COUNT(*) FROM flights{filter}");

    let params: Vec<&dyn ToSql> = args.iter().map(|s| s as &dyn ToSql).collect();
    let (hours, count): (f64, i64) =
        conn.query_row(&sql, params.as_slice(), |row| Ok((row.get(0)?, row.get(1)?)))?;

    Ok((round_hours(hours), count))
}

/// Both groupings plus the overall totals, recomputed from scratch.
pub fn load_stats(
    conn: &Connection,
    bounds: &Option<(NaiveDate, NaiveDate)>,
) -> AppResult<FlightStats> {
    let (total_hours, total_flights) = overall_totals(conn, bounds)?;

    Ok(FlightStats {
        by_pilot: totals_by(conn, GroupBy::Pilot, bounds)?,
        by_drone: totals_by(conn, GroupBy::Drone, bounds)?,
        total_hours,
        total_flights,
    })
}

/// Summary shown by `db --info`.
#[derive(Debug, Clone)]
pub struct DbInfo {
    pub path: String,
    pub size_bytes: u64,
    pub flights: i64,
    pub total_hours: f64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub log_entries: i64,
}

pub fn collect_db_info(conn: &Connection, db_path: &str) -> AppResult<DbInfo> {
    let size_bytes = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let (total_hours, flights) = overall_totals(conn, &None)?;

    let first_date: Option<String> = conn
        .query_row(
            "SELECT date FROM flights ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = conn
        .query_row(
            "SELECT date FROM flights ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let log_entries: i64 = conn.query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;

    Ok(DbInfo {
        path: db_path.to_string(),
        size_bytes,
        flights,
        total_hours,
        first_date,
        last_date,
        log_entries,
    })
}
