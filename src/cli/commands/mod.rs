pub mod config;
pub mod day;
pub mod legend;
pub mod week;
