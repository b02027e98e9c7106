pub mod day_events;
pub mod game_day;
pub mod layout_box;
pub mod session_row;

pub use day_events::{DayEvents, Event};
pub use game_day::{GameDay, SessionSpan};
pub use layout_box::LayoutBox;
pub use session_row::SessionRow;
