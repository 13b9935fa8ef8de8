pub mod flight;
pub mod summary;

pub use flight::{Flight, NewFlight};
pub use summary::{FlightStats, GroupBy, GroupTotal};
