use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, FlightForm};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::{date, time};

/// Log a flight.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        start,
        end,
        project,
        pilot,
        drone,
    } = cmd
    {
        //
        // 1. Date (default = today)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        //
        // 2. Time window (defaults from configuration)
        //
        let start = match time::parse_optional_time(start.as_ref())? {
            Some(t) => t,
            None => time::parse_time(&cfg.default_start)
                .ok_or_else(|| AppError::Config(format!("bad default_start '{}'", cfg.default_start)))?,
        };
        let end = match time::parse_optional_time(end.as_ref())? {
            Some(t) => t,
            None => time::parse_time(&cfg.default_end)
                .ok_or_else(|| AppError::Config(format!("bad default_end '{}'", cfg.default_end)))?,
        };

        let form = FlightForm {
            date: d,
            start,
            end,
            project: project.clone(),
            pilot: pilot.clone(),
            drone: drone.clone(),
        };

        //
        // 3. Validate before touching the database
        //
        AddLogic::validate(&form, cfg)?;

        //
        // 4. Store
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let flight = AddLogic::apply(&mut pool, cfg, &form)?;

        success(format!(
            "Flight #{} saved! Duration: {} hours",
            flight.id,
            flight.duration_str()
        ));
    }

    Ok(())
}
