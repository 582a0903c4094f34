use clap::{Args, Subcommand};

/// Session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EventsCommands {
    /// List sessions passing every filter, with their current status.
    List(FilterArgs),
    /// Show the discipline, épreuve and status options for a selection.
    Options(ChainArgs),
    /// Count filtered sessions by status.
    Stats(FilterArgs),
}

/// Venue, discipline, épreuve and reference-instant arguments shared by
/// every `events` subcommand.
#[derive(Clone, Debug, Default, Args)]
pub struct ChainArgs {
    /// Venue id.
    #[arg(long)]
    pub venue: Option<u32>,
    /// Discipline id.
    #[arg(long)]
    pub discipline: Option<u32>,
    /// Épreuve id.
    #[arg(long)]
    pub epreuve: Option<u32>,
    /// Resolve statuses at this instant instead of now (`YYYY-MM-DDTHH:MM`).
    #[arg(long)]
    pub at: Option<String>,
}

/// Full filter set of the sessions screen.
#[derive(Clone, Debug, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive text matched against description, venue and épreuves.
    #[arg(long)]
    pub search: Option<String>,
    #[command(flatten)]
    pub facets: ChainArgs,
    /// Status: upcoming, ongoing, completed.
    #[arg(long)]
    pub status: Option<String>,
    /// First day included (`YYYY-MM-DD`).
    #[arg(long)]
    pub from: Option<String>,
    /// Last day included (`YYYY-MM-DD`).
    #[arg(long)]
    pub to: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}
