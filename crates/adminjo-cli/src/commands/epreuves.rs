use serde::Serialize;

use adminjo_core::entities::Epreuve;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EpreuveCommands;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct EpreuveListResponse {
    epreuves: Vec<Epreuve>,
}

/// Handle `adminjo epreuves`.
pub fn handle(
    action: &EpreuveCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EpreuveCommands::List {
            discipline,
            search,
            limit,
        } => {
            if let Some(id) = discipline {
                ctx.catalog.discipline(*id)?;
            }
            let mut epreuves = ctx.catalog.list_epreuves(*discipline, search.as_deref());
            truncate_to(
                &mut epreuves,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&EpreuveListResponse { epreuves }, flags)
        }
        EpreuveCommands::Get { id } => output(ctx.catalog.epreuve(*id)?, flags),
    }
}
