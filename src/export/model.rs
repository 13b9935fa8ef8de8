use crate::models::Flight;
use crate::utils::time::format_hours;
use serde::Serialize;

/// Flat export row: a flight without its internal id.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FlightExport {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: f64,
    pub project: String,
    pub pilot: String,
    pub drone: String,
}

impl From<&Flight> for FlightExport {
    fn from(f: &Flight) -> Self {
        Self {
            date: f.date_str(),
            start_time: f.start_str(),
            end_time: f.end_str(),
            duration: f.duration,
            project: f.project.clone(),
            pilot: f.pilot.clone(),
            drone: f.drone.clone(),
        }
    }
}

/// Column titles shared by CSV and XLSX.
pub const HEADERS: [&str; 7] = [
    "Date",
    "Start time",
    "End time",
    "Duration (h)",
    "Project",
    "Pilot",
    "Drone",
];

/// Row of display strings in `HEADERS` order.
pub(crate) fn flight_to_row(e: &FlightExport) -> [String; 7] {
    [
        e.date.clone(),
        e.start_time.clone(),
        e.end_time.clone(),
        format_hours(e.duration),
        e.project.clone(),
        e.pilot.clone(),
        e.drone.clone(),
    ]
}
