mod combat_event;
mod error;
mod reader;
mod roster;

pub use combat_event::*;
pub use error::LoadError;
pub use reader::{read_actors, read_events};
pub use roster::Roster;
