pub mod add;
pub mod backup;
pub mod del;
pub mod duration;
pub mod list;
pub mod log;
pub mod report;
pub mod stats;
