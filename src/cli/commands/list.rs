use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::{ListFilter, ListLogic};
use crate::core::report::render_flights;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::range::parse_optional_range;
use crate::utils::time::{format_hours, hours2readable, round_hours};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        range,
        pilot,
        drone,
    } = cmd
    {
        let filter = ListFilter {
            bounds: parse_optional_range(range.as_ref())?,
            pilot: pilot.clone(),
            drone: drone.clone(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let flights = ListLogic::load(&pool, &filter)?;

        if flights.is_empty() {
            if filter.bounds.is_some() || filter.pilot.is_some() || filter.drone.is_some() {
                warning("No flights match the selected filters.");
            } else {
                warning("No flights logged.");
            }
            return Ok(());
        }

        header("Logged flights (Admin)");
        print!("{}", render_flights(&flights, cfg.separator()));

        let total = round_hours(flights.iter().map(|f| f.duration).sum());
        println!(
            "\n{} flight(s), {} h ({})",
            flights.len(),
            format_hours(total),
            hours2readable(total)
        );
    }
    Ok(())
}
