pub mod colors;
pub mod date;
pub mod path;
pub mod range;
pub mod table;
pub mod time;

pub use time::{format_hours, round_hours};
