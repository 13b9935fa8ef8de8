use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::{DbInfo, collect_db_info};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use crate::utils::time::{format_hours, hours2readable};

fn print_db_info(info: &DbInfo) {
    let file_mb = (info.size_bytes as f64) / (1024.0 * 1024.0);

    println!();
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, info.path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
    println!(
        "{}• Total flights:{} {}{}{}",
        CYAN, RESET, GREEN, info.flights, RESET
    );
    println!(
        "{}• Flight hours:{} {} h ({})",
        CYAN,
        RESET,
        format_hours(info.total_hours),
        hours2readable(info.total_hours)
    );

    let missing = format!("{GREY}--{RESET}");
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", info.first_date.as_deref().unwrap_or(&missing));
    println!("    to:   {}", info.last_date.as_deref().unwrap_or(&missing));
    println!("{}• Log entries:{} {}", CYAN, RESET, info.log_entries);
    println!();
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        if *migrate {
            let raw = DbPool::open_raw(&cfg.database)?;
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let applied = run_pending_migrations(&raw.conn)?;
            println!(
                "{}✔ Migration completed ({} pending applied).{}\n",
                GREEN, applied, RESET
            );
        }

        let pool = DbPool::new(&cfg.database)?;

        if *info {
            let db_info = collect_db_info(&pool.conn, &cfg.database)?;
            print_db_info(&db_info);
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
