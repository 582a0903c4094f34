use clap::Subcommand;

/// Venue commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VenueCommands {
    /// List venues sorted by name.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a venue by ID.
    Get { id: u32 },
}

/// Discipline commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DisciplineCommands {
    /// List disciplines sorted by name.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a discipline by ID.
    Get { id: u32 },
}

/// Épreuve commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EpreuveCommands {
    /// List épreuves sorted by discipline, then label.
    List {
        /// Only épreuves of this discipline id.
        #[arg(long)]
        discipline: Option<u32>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an épreuve by ID.
    Get { id: u32 },
}
