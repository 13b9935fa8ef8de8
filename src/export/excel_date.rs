//! Excel serial numbers for dates and times of day.

use chrono::{NaiveDate, NaiveTime, Timelike};

pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";
pub(crate) const TIME_FORMAT: &str = "hh:mm:ss";

/// Days since 1899-12-30, the epoch Excel uses for its 1900 date system.
pub(crate) fn date_to_excel_serial(d: &NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).expect("valid Excel epoch");
    (*d - epoch).num_days() as f64
}

/// Fraction of a day.
pub(crate) fn time_to_excel_serial(t: &NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}
