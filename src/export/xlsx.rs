// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{
    DATE_FORMAT, TIME_FORMAT, date_to_excel_serial, time_to_excel_serial,
};
use crate::export::model::{FlightExport, HEADERS, flight_to_row};
use crate::models::{FlightStats, GroupBy, GroupTotal};
use crate::utils::date::parse_date;
use crate::utils::time::parse_time;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use unicode_width::UnicodeWidthStr;

const HOURS_FORMAT: &str = "0.00";

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX error: {e}"))
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn cell_format(band: Color) -> Format {
    Format::new()
        .set_background_color(band)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn band_for(row_index: usize) -> Color {
    if row_index % 2 == 0 {
        Color::RGB(0xEAF3FB)
    } else {
        Color::RGB(0xFFFFFF)
    }
}

fn write_header(ws: &mut Worksheet, row: u32, headers: &[&str]) -> AppResult<()> {
    let fmt = header_format();
    for (col, header) in headers.iter().enumerate() {
        ws.write_with_format(row, col as u16, *header, &fmt)
            .map_err(to_export_error)?;
    }
    Ok(())
}

fn set_widths(ws: &mut Worksheet, widths: &[usize]) -> AppResult<()> {
    for (c, w) in widths.iter().enumerate() {
        ws.set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }
    Ok(())
}

/// One flight row. Dates, times and hours become native Excel values;
/// anything that does not parse is written as text.
fn write_flight_row(
    ws: &mut Worksheet,
    row: u32,
    values: &[String; 7],
    band: Color,
) -> AppResult<()> {
    let base = cell_format(band);

    for (col, v) in values.iter().enumerate() {
        let numeric = match col {
            0 => parse_date(v).map(|d| (date_to_excel_serial(&d), DATE_FORMAT)),
            1 | 2 => parse_time(v).map(|t| (time_to_excel_serial(&t), TIME_FORMAT)),
            3 => v.parse::<f64>().ok().map(|h| (h, HOURS_FORMAT)),
            _ => None,
        };

        match numeric {
            Some((serial, num_format)) => ws.write_with_format(
                row,
                col as u16,
                serial,
                &base.clone().set_num_format(num_format),
            ),
            None => ws.write_with_format(row, col as u16, v.as_str(), &base),
        }
        .map_err(to_export_error)?;
    }
    Ok(())
}

fn write_flights_sheet(ws: &mut Worksheet, flights: &[FlightExport]) -> AppResult<()> {
    ws.set_name("Flights").map_err(to_export_error)?;

    write_header(ws, 0, &HEADERS)?;
    ws.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (i, f) in flights.iter().enumerate() {
        let values = flight_to_row(f);
        write_flight_row(ws, (i + 1) as u32, &values, band_for(i))?;

        for (col, v) in values.iter().enumerate() {
            widths[col] = widths[col].max(UnicodeWidthStr::width(v.as_str()));
        }
    }

    set_widths(ws, &widths)
}

/// Writes one grouping table starting at `first_row`; returns the next free row.
fn write_totals_block(
    ws: &mut Worksheet,
    first_row: u32,
    group: GroupBy,
    totals: &[GroupTotal],
    widths: &mut [usize],
) -> AppResult<u32> {
    let title = match group {
        GroupBy::Pilot => "Total flight hours per pilot",
        GroupBy::Drone => "Total flight hours per drone",
    };
    ws.write_with_format(first_row, 0, title, &Format::new().set_bold())
        .map_err(to_export_error)?;

    let headers = [group.label(), "Total hours", "Flights"];
    write_header(ws, first_row + 1, &headers)?;

    let mut row = first_row + 2;
    for (i, t) in totals.iter().enumerate() {
        let base = cell_format(band_for(i));
        ws.write_with_format(row, 0, t.key.as_str(), &base)
            .map_err(to_export_error)?;
        ws.write_with_format(row, 1, t.hours, &base.clone().set_num_format(HOURS_FORMAT))
            .map_err(to_export_error)?;
        ws.write_with_format(row, 2, t.flights as f64, &base)
            .map_err(to_export_error)?;

        widths[0] = widths[0].max(UnicodeWidthStr::width(t.key.as_str()));
        row += 1;
    }

    Ok(row + 1)
}

fn write_stats_sheet(ws: &mut Worksheet, stats: &FlightStats) -> AppResult<()> {
    ws.set_name("Statistics").map_err(to_export_error)?;

    let mut widths = vec![
        UnicodeWidthStr::width("Total flight hours per pilot"),
        UnicodeWidthStr::width("Total hours"),
        UnicodeWidthStr::width("Flights"),
    ];

    let next = write_totals_block(ws, 0, GroupBy::Pilot, &stats.by_pilot, &mut widths)?;
    let next = write_totals_block(ws, next, GroupBy::Drone, &stats.by_drone, &mut widths)?;

    let bold = Format::new().set_bold();
    ws.write_with_format(next, 0, "Total", &bold)
        .map_err(to_export_error)?;
    ws.write_with_format(next, 1, stats.total_hours, &bold.clone().set_num_format(HOURS_FORMAT))
        .map_err(to_export_error)?;
    ws.write_with_format(next, 2, stats.total_flights as f64, &bold)
        .map_err(to_export_error)?;

    set_widths(ws, &widths)
}

/// Workbook with a "Flights" sheet and a "Statistics" sheet, as bytes.
pub fn render_xlsx(flights: &[FlightExport], stats: &FlightStats) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    write_flights_sheet(workbook.add_worksheet(), flights)?;
    write_stats_sheet(workbook.add_worksheet(), stats)?;

    workbook.save_to_buffer().map_err(to_export_error)
}
