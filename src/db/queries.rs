use crate::errors::{AppError, AppResult};
use crate::models::{Flight, NewFlight};
use crate::utils::date::{format_db_date, parse_date};
use crate::utils::time::{format_db_time, parse_time};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_FLIGHTS: &str =
    "SELECT id, date, start_time, end_time, duration, project, pilot, drone FROM flights";

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

/// Mapping DB → Flight (reused by every flight query).
pub fn map_row(row: &Row) -> Result<Flight> {
    let date_str: String = row.get("date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let date = parse_date(&date_str)
        .ok_or_else(|| conversion_error(1, AppError::InvalidDate(date_str.clone())))?;
    let start_time = parse_time(&start_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidTime(start_str.clone())))?;
    let end_time = parse_time(&end_str)
        .ok_or_else(|| conversion_error(3, AppError::InvalidTime(end_str.clone())))?;

    Ok(Flight {
        id: row.get("id")?,
        date,
        start_time,
        end_time,
        duration: row.get("duration")?,
        project: row.get("project")?,
        pilot: row.get("pilot")?,
        drone: row.get("drone")?,
    })
}

/// Insert a validated flight and return the id assigned by SQLite.
pub fn insert_flight(conn: &Connection, f: &NewFlight) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO flights (date, start_time, end_time, duration, project, pilot, drone)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            format_db_date(&f.date),
            format_db_time(&f.start_time),
            format_db_time(&f.end_time),
            f.duration,
            f.project,
            f.pilot,
            f.drone,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full-table scan in storage order.
pub fn load_all_flights(conn: &Connection) -> AppResult<Vec<Flight>> {
    let mut stmt = conn.prepare(&format!("{SELECT_FLIGHTS} ORDER BY id ASC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Flights whose date falls in `[from, to]`, in storage order.
pub fn load_flights_between(
    conn: &Connection,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<Flight>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_FLIGHTS} WHERE date BETWEEN ?1 AND ?2 ORDER BY id ASC"
    ))?;
    let rows = stmt.query_map(params![format_db_date(from), format_db_date(to)], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load all flights, or only a date range when bounds are given.
pub fn load_flights(
    conn: &Connection,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<Flight>> {
    match bounds {
        None => load_all_flights(conn),
        Some((from, to)) => load_flights_between(conn, &from, &to),
    }
}

pub fn load_flight(conn: &Connection, id: i64) -> AppResult<Option<Flight>> {
    let mut stmt = conn.prepare(&format!("{SELECT_FLIGHTS} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Delete exactly one flight. A missing id is an error.
pub fn delete_flight(conn: &Connection, id: i64) -> AppResult<()> {
    let deleted = conn.execute("DELETE FROM flights WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(AppError::FlightNotFound(id));
    }
    Ok(())
}

pub fn count_flights(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM flights", [], |row| row.get(0))?)
}
