use serde::Serialize;

use adminjo_core::entities::Venue;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VenueCommands;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct VenueListResponse {
    venues: Vec<Venue>,
}

/// Handle `adminjo venues`.
pub fn handle(action: &VenueCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        VenueCommands::List { search, limit } => {
            let mut venues = ctx.catalog.list_venues(search.as_deref());
            truncate_to(
                &mut venues,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&VenueListResponse { venues }, flags)
        }
        VenueCommands::Get { id } => output(ctx.catalog.venue(*id)?, flags),
    }
}
