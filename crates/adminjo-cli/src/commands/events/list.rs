use adminjo_core::responses::SessionView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FilterArgs;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::commands::shared::selection::{filter_selection, reference_instant};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct EventListResponse {
    /// Sessions matching the filters, before the limit applies.
    total: usize,
    sessions: Vec<SessionView>,
}

pub fn run(args: &FilterArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let selection = filter_selection(args, &ctx.catalog)?;
    let engine = ctx.engine(reference_instant(&args.facets)?);
    let limit = effective_limit(args.limit, flags.limit, ctx.config.general.default_limit);

    let filtered = engine.filtered_sessions(&ctx.sessions, &selection);
    let total = filtered.len();
    let mut sessions: Vec<SessionView> = filtered.iter().map(|s| engine.view(s)).collect();
    truncate_to(&mut sessions, limit);

    output(&EventListResponse { total, sessions }, flags)
}
