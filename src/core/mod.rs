pub mod layout;
pub mod loader;
pub mod logic;
pub mod week;

pub use logic::Core;
