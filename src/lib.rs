pub mod config;
pub mod error;
pub mod roster;
pub mod startup;
pub mod utils;

pub use roster::{parse_schedule, parse_schedule_default, Period, RosterSettings};
