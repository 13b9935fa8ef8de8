use crate::db::log::write_log_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_flight, load_flight};
use crate::errors::{AppError, AppResult};
use crate::models::Flight;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Look up the flight that `apply` would remove.
    pub fn preview(pool: &DbPool, id: i64) -> AppResult<Flight> {
        load_flight(&pool.conn, id)?.ok_or(AppError::FlightNotFound(id))
    }

    /// Delete one flight by id and return what was removed.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<Flight> {
        let flight = Self::preview(pool, id)?;
        delete_flight(&pool.conn, id)?;

        write_log_quiet(&pool.conn, "del", &format!("flight #{id}"), &flight.describe());
        Ok(flight)
    }
}
