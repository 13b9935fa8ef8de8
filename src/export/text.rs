//! CSV and JSON renderers.

use crate::errors::{AppError, AppResult};
use crate::export::model::{FlightExport, HEADERS, flight_to_row};

/// UTF-8 CSV with a header row, one line per flight.
pub fn render_csv(flights: &[FlightExport]) -> AppResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(HEADERS)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for f in flights {
        wtr.write_record(flight_to_row(f))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))
}

/// Pretty-printed JSON array.
pub fn render_json(flights: &[FlightExport]) -> AppResult<Vec<u8>> {
    serde_json::to_vec_pretty(flights)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}
