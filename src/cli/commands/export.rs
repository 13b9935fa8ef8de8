use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::range::parse_optional_range;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let bounds = parse_optional_range(range.as_ref())?;
        let pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&pool, *format, file, bounds, *force)?;
    }
    Ok(())
}
