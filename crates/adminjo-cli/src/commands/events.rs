mod list;
mod options;
mod stats;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EventsCommands;
use crate::context::AppContext;

/// Handle `adminjo events`.
pub fn handle(action: &EventsCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        EventsCommands::List(args) => list::run(args, ctx, flags),
        EventsCommands::Options(args) => options::run(args, ctx, flags),
        EventsCommands::Stats(args) => stats::run(args, ctx, flags),
    }
}
