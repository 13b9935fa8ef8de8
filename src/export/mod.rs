// src/export/mod.rs

mod excel_date;
mod fs_utils;
pub mod logic;
pub mod model;
pub mod text;
pub mod xlsx;

pub use logic::ExportLogic;
pub use model::{FlightExport, HEADERS};
pub use text::{render_csv, render_json};
pub use xlsx::render_xlsx;

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Xlsx => "XLSX",
        }
    }
}
