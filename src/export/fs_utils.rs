// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use crate::utils::path::expand_tilde;
use std::path::{Path, PathBuf};

/// Expand `~` and require an absolute output path.
pub(crate) fn resolve_output_path(file: &str) -> AppResult<PathBuf> {
    let path = expand_tilde(file);
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {file}"
        )));
    }
    Ok(path)
}

/// Whether a file may be created or overwritten.
///
/// - file does not exist → Ok(true)
/// - file exists and `force` → Ok(true)
/// - otherwise the user is asked; a refusal → Ok(false)
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<bool> {
    if !path.exists() || force {
        return Ok(true);
    }

    if confirm(format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        Ok(true)
    } else {
        Ok(false)
    }
}
