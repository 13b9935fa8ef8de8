use crate::utils::date::format_db_date;
use crate::utils::time::{format_db_time, format_hours};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// A flight as stored in the `flights` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    pub id: i64,
    pub date: NaiveDate,       // ⇔ flights.date (TEXT "YYYY-MM-DD")
    pub start_time: NaiveTime, // ⇔ flights.start_time (TEXT "HH:MM:SS")
    pub end_time: NaiveTime,   // ⇔ flights.end_time (TEXT "HH:MM:SS")
    pub duration: f64,         // ⇔ flights.duration (REAL, hours, > 0)
    pub project: String,
    pub pilot: String,
    pub drone: String,
}

/// A validated flight that has not been stored yet.
///
/// Only `core::add::AddLogic` builds these, after the duration and fleet
/// checks passed, so every `NewFlight` satisfies `duration > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFlight {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration: f64,
    pub project: String,
    pub pilot: String,
    pub drone: String,
}

impl NewFlight {
    pub fn with_id(self, id: i64) -> Flight {
        Flight {
            id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            duration: self.duration,
            project: self.project,
            pilot: self.pilot,
            drone: self.drone,
        }
    }
}

impl Flight {
    pub fn date_str(&self) -> String {
        format_db_date(&self.date)
    }

    pub fn start_str(&self) -> String {
        format_db_time(&self.start_time)
    }

    pub fn end_str(&self) -> String {
        format_db_time(&self.end_time)
    }

    pub fn duration_str(&self) -> String {
        format_hours(self.duration)
    }

    /// One-line description used in confirmations and the audit log.
    pub fn describe(&self) -> String {
        format!(
            "{} {}-{} | {} | {} | {}h",
            self.date_str(),
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
            self.pilot,
            self.drone,
            self.duration_str()
        )
    }
}
