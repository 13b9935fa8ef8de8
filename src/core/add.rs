use crate::config::Config;
use crate::core::duration::validate_window;
use crate::db::log::write_log_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::insert_flight;
use crate::errors::AppResult;
use crate::models::{Flight, NewFlight};
use chrono::{NaiveDate, NaiveTime};

/// Raw form input for a new flight, before validation.
#[derive(Debug, Clone)]
pub struct FlightForm {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub project: String,
    pub pilot: String,
    pub drone: String,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate a form against the duration rule and the configured fleet.
    pub fn validate(form: &FlightForm, cfg: &Config) -> AppResult<NewFlight> {
        let duration = validate_window(form.start, form.end)?;
        let pilot = cfg.resolve_pilot(&form.pilot)?;
        let drone = cfg.resolve_drone(&form.drone)?;

        Ok(NewFlight {
            date: form.date,
            start_time: form.start,
            end_time: form.end,
            duration,
            project: form.project.clone(),
            pilot,
            drone,
        })
    }

    /// Validate and store a flight. Nothing is written when validation fails.
    pub fn apply(pool: &mut DbPool, cfg: &Config, form: &FlightForm) -> AppResult<Flight> {
        let flight = Self::validate(form, cfg)?;

        let id = insert_flight(&pool.conn, &flight)?;
        let stored = flight.with_id(id);
        write_log_quiet(
            &pool.conn,
            "add",
            &format!("flight #{id}"),
            &stored.describe(),
        );

        Ok(stored)
    }
}
