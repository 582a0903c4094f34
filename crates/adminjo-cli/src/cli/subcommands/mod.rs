mod catalog;
mod events;

pub use catalog::{DisciplineCommands, EpreuveCommands, VenueCommands};
pub use events::{ChainArgs, EventsCommands, FilterArgs};
