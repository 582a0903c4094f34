use serde::Serialize;

use adminjo_core::entities::Discipline;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DisciplineCommands;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DisciplineListResponse {
    disciplines: Vec<Discipline>,
}

/// Handle `adminjo disciplines`.
pub fn handle(
    action: &DisciplineCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DisciplineCommands::List { search, limit } => {
            let mut disciplines = ctx.catalog.list_disciplines(search.as_deref());
            truncate_to(
                &mut disciplines,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&DisciplineListResponse { disciplines }, flags)
        }
        DisciplineCommands::Get { id } => output(ctx.catalog.discipline(*id)?, flags),
    }
}
