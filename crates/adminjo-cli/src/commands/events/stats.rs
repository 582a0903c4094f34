use adminjo_core::responses::StatsResponse;
use adminjo_core::stats::StatusCounts;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FilterArgs;
use crate::commands::shared::selection::{filter_selection, reference_instant};
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &FilterArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let selection = filter_selection(args, &ctx.catalog)?;
    let engine = ctx.engine(reference_instant(&args.facets)?);

    let filtered = engine.filtered_sessions(&ctx.sessions, &selection);
    let counts = StatusCounts::tally(engine.resolver(), &filtered);

    output(&StatsResponse { selection, counts }, flags)
}
