use crate::db::pool::DbPool;
use crate::db::queries::load_flights;
use crate::errors::AppResult;
use crate::models::Flight;
use chrono::NaiveDate;

/// Optional filters for `list`.
#[derive(Debug, Default, Clone)]
pub struct ListFilter {
    pub bounds: Option<(NaiveDate, NaiveDate)>,
    pub pilot: Option<String>,
    pub drone: Option<String>,
}

fn matches(value: &str, wanted: &Option<String>) -> bool {
    match wanted {
        Some(w) => value.eq_ignore_ascii_case(w.trim()),
        None => true,
    }
}

pub struct ListLogic;

impl ListLogic {
    /// Flights in storage order, narrowed by the filter.
    pub fn load(pool: &DbPool, filter: &ListFilter) -> AppResult<Vec<Flight>> {
        let flights = load_flights(&pool.conn, filter.bounds)?;

        Ok(flights
            .into_iter()
            .filter(|f| matches(&f.pilot, &filter.pilot) && matches(&f.drone, &filter.drone))
            .collect())
    }
}
