// src/export/logic.rs

use crate::db::log::write_log_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::load_flights;
use crate::db::stats::load_stats;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, resolve_output_path};
use crate::export::model::FlightExport;
use crate::export::text::{render_csv, render_json};
use crate::export::xlsx::render_xlsx;
use crate::ui::messages::{info, success, warning};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Flights (without ids) selected by the optional date range.
    pub fn load(
        pool: &DbPool,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<FlightExport>> {
        let flights = load_flights(&pool.conn, bounds)?;
        Ok(flights.iter().map(FlightExport::from).collect())
    }

    /// Render the selection in the requested format.
    pub fn render(
        pool: &DbPool,
        format: ExportFormat,
        rows: &[FlightExport],
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<u8>> {
        match format {
            ExportFormat::Csv => render_csv(rows),
            ExportFormat::Json => render_json(rows),
            ExportFormat::Xlsx => {
                let stats = load_stats(&pool.conn, &bounds)?;
                render_xlsx(rows, &stats)
            }
        }
    }

    /// Export flights to `file`.
    ///
    /// - `file`: absolute path (a leading `~/` is expanded)
    /// - `bounds`: `None` for every flight, or an inclusive date range
    /// - `force`: overwrite without asking
    ///
    /// Returns the written path, or `None` when nothing was written.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        bounds: Option<(NaiveDate, NaiveDate)>,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let path = resolve_output_path(file)?;

        let rows = Self::load(pool, bounds)?;
        if rows.is_empty() {
            warning("No flights found for the selected range. Nothing to export.");
            return Ok(None);
        }

        if !ensure_writable(&path, force)? {
            info("Export cancelled: existing file not overwritten.");
            return Ok(None);
        }

        info(format!(
            "Exporting {} flight(s) to {}: {}",
            rows.len(),
            format.label(),
            path.display()
        ));

        let bytes = Self::render(pool, format, &rows, bounds)?;
        fs::write(&path, bytes)?;

        success(format!("{} export completed: {}", format.label(), path.display()));
        write_log_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} flight(s) as {}", rows.len(), format.as_str()),
        );

        Ok(Some(path))
    }
}
