use clap::Subcommand;

use crate::cli::subcommands::{
    DisciplineCommands, EpreuveCommands, EventsCommands, VenueCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sessions: filtered listing, dropdown options and status counts.
    Events {
        #[command(subcommand)]
        action: EventsCommands,
    },
    /// Venues (lieux).
    Venues {
        #[command(subcommand)]
        action: VenueCommands,
    },
    /// Disciplines.
    Disciplines {
        #[command(subcommand)]
        action: DisciplineCommands,
    },
    /// Épreuves.
    Epreuves {
        #[command(subcommand)]
        action: EpreuveCommands,
    },
}
