pub mod grid;
pub mod legend;
pub mod messages;
