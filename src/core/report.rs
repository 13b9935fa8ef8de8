//! Plain-text rendering of listings and statistics.

use crate::models::{Flight, FlightStats, GroupBy, GroupTotal};
use crate::utils::colors::{colorize_hours, colorize_optional};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_hours, hours2readable};

pub fn render_flights(flights: &[Flight], separator: char) -> String {
    let mut table = Table::new(
        vec![
            Column::right("ID"),
            Column::left("Date"),
            Column::left("Start"),
            Column::left("End"),
            Column::right("Hours"),
            Column::left("Project"),
            Column::left("Pilot"),
            Column::left("Drone"),
        ],
        separator,
    );

    for f in flights {
        table.add_row(vec![
            f.id.to_string(),
            f.date_str(),
            f.start_str(),
            f.end_str(),
            colorize_hours(f.duration, &f.duration_str()),
            colorize_optional(&f.project),
            f.pilot.clone(),
            f.drone.clone(),
        ]);
    }

    table.render()
}

pub fn render_totals(group: GroupBy, totals: &[GroupTotal], separator: char) -> String {
    let mut table = Table::new(
        vec![
            Column::left(group.label()),
            Column::right("Total hours"),
            Column::right("Time"),
            Column::right("Flights"),
        ],
        separator,
    );

    for t in totals {
        table.add_row(vec![
            t.key.clone(),
            colorize_hours(t.hours, &format_hours(t.hours)),
            hours2readable(t.hours),
            t.flights.to_string(),
        ]);
    }

    table.render()
}

/// `Total: 3 flights, 4.25 h (04h 15m)`
pub fn render_overall(stats: &FlightStats) -> String {
    format!(
        "Total: {} flight{}, {} h ({})",
        stats.total_flights,
        if stats.total_flights == 1 { "" } else { "s" },
        format_hours(stats.total_hours),
        hours2readable(stats.total_hours)
    )
}
