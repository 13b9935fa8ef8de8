use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, header, success, warning};
use std::process::Command;

fn print_fleet(cfg: &Config) {
    header("Pilots");
    for p in &cfg.pilots {
        println!("  • {}", p);
    }
    header("Drones");
    for d in &cfg.drones {
        println!("  • {}", d);
    }
}

/// Launch `editor` on `path`, falling back to the platform default.
fn edit_file(path: &std::path::Path, editor: &Option<String>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        _ if editor_to_use != default_editor => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));
            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                )),
                _ => error(format!(
                    "Failed to edit configuration file using fallback '{}'",
                    default_editor
                )),
            }
        }
        _ => error(format!(
            "Failed to edit configuration file using '{}'",
            editor_to_use
        )),
    }
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        fleet,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        if *fleet {
            print_fleet(cfg);
        }

        if *check {
            cfg.check_fleet()?;
            success(format!(
                "Configuration OK: {} pilot(s), {} drone(s).",
                cfg.pilots.len(),
                cfg.drones.len()
            ));
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} does not exist, run `dronelog init` first",
                    path.display()
                )));
            }
            edit_file(&path, editor);
        }
    }

    Ok(())
}
