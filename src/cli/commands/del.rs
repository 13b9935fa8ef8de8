use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let flight = DeleteLogic::preview(&pool, *id)?;

        if !*yes
            && !confirm(format!(
                "Delete flight #{} ({})? This action is irreversible.",
                id,
                flight.describe()
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&mut pool, *id)?;
        success(format!(
            "Flight #{} deleted ({} h removed).",
            removed.id,
            removed.duration_str()
        ));
    }

    Ok(())
}
