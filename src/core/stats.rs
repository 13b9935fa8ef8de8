use crate::db::pool::DbPool;
use crate::db::stats::load_stats;
use crate::errors::AppResult;
use crate::models::FlightStats;
use chrono::NaiveDate;

/// Per-pilot / per-drone aggregation, recomputed on every call.
pub struct StatsLogic;

impl StatsLogic {
    pub fn compute(pool: &DbPool, bounds: Option<(NaiveDate, NaiveDate)>) -> AppResult<FlightStats> {
        load_stats(&pool.conn, &bounds)
    }
}
