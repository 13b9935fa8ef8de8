use serde::Serialize;

/// Grouping key for the flight-hours aggregations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Pilot,
    Drone,
}

impl GroupBy {
    /// Column of the `flights` table the rows are grouped on.
    pub fn column(&self) -> &'static str {
        match self {
            GroupBy::Pilot => "pilot",
            GroupBy::Drone => "drone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Pilot => "Pilot",
            GroupBy::Drone => "Drone",
        }
    }
}

/// One row of a GROUP BY result: `(key, hours, flights)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    pub key: String,
    pub hours: f64,
    pub flights: i64,
}

/// Both groupings plus the overall totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlightStats {
    pub by_pilot: Vec<GroupTotal>,
    pub by_drone: Vec<GroupTotal>,
    pub total_hours: f64,
    pub total_flights: i64,
}

impl FlightStats {
    pub fn is_empty(&self) -> bool {
        self.total_flights == 0
    }
}
