use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Events { action } => commands::events::handle(action, ctx, flags),
        Commands::Venues { action } => commands::venues::handle(action, ctx, flags),
        Commands::Disciplines { action } => commands::disciplines::handle(action, ctx, flags),
        Commands::Epreuves { action } => commands::epreuves::handle(action, ctx, flags),
    }
}
