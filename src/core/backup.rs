use crate::db::log::write_log_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use chrono::Local;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// Write `src` into a new zip archive at `zip_path` as a single entry.
fn zip_file(src: &Path, zip_path: &Path, entry_name: &str) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)
        .map_err(io::Error::other)?;

    let mut f = fs::File::open(src)?;
    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}

/// Zip the database next to itself before a schema upgrade.
pub(crate) fn backup_before_migration(db_path: &str) -> AppResult<PathBuf> {
    let src = Path::new(db_path);
    let dir = src.parent().unwrap_or_else(|| Path::new("."));

    let backup_name = format!(
        "{}-backup_db_pre_migration.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let backup_path = dir.join(backup_name);

    zip_file(src, &backup_path, "database.sqlite")
        .map_err(|e| AppError::Migration(format!("backup before migration failed: {e}")))?;

    Ok(backup_path)
}

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally replacing it with a zip.
    /// Returns the final backup path, or `None` when the user declined to
    /// overwrite an existing file.
    pub fn backup(
        pool: &DbPool,
        db_path: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);
        let dest = crate::utils::path::expand_tilde(dest_file);

        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_path = if compress {
            dest.with_extension("zip")
        } else {
            dest.clone()
        };

        if let (Ok(a), Ok(b)) = (src.canonicalize(), final_path.canonicalize())
            && a == b
        {
            return Err(AppError::Other(format!(
                "Backup destination is the database itself: {}",
                final_path.display()
            )));
        }

        if final_path.exists()
            && !force
            && !crate::ui::messages::confirm(format!(
                "The file '{}' already exists. Overwrite it?",
                final_path.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        if compress {
            let entry = src
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "dronelog.sqlite".to_string());
            zip_file(src, &final_path, &entry)?;
            success(format!("📦 Compressed backup created: {}", final_path.display()));
        } else {
            fs::copy(src, &final_path)?;
            success(format!("Backup created: {}", final_path.display()));
        }

        if final_path.metadata().map(|m| m.len()).unwrap_or(0) == 0 {
            warning("Backup file is empty.");
        }

        write_log_quiet(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}
