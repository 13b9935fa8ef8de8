use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{render_overall, render_totals};
use crate::core::stats::StatsLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::GroupBy;
use crate::ui::messages::{header, warning};
use crate::utils::range::parse_optional_range;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { range } = cmd {
        let bounds = parse_optional_range(range.as_ref())?;

        let pool = DbPool::new(&cfg.database)?;
        let stats = StatsLogic::compute(&pool, bounds)?;

        if stats.is_empty() {
            warning("No flights logged.");
            return Ok(());
        }

        let sep = cfg.separator();

        header("Total flight hours per pilot");
        print!("{}", render_totals(GroupBy::Pilot, &stats.by_pilot, sep));

        header("Total flight hours per drone");
        print!("{}", render_totals(GroupBy::Drone, &stats.by_drone, sep));

        println!("\n{}", render_overall(&stats));
    }
    Ok(())
}
