use adminjo_core::responses::FacetOptionsResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChainArgs;
use crate::commands::shared::selection::{chain_selection, reference_instant};
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &ChainArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let selection = chain_selection(args, &ctx.catalog)?;
    let engine = ctx.engine(reference_instant(args)?);
    let options = engine.options(&ctx.sessions, &ctx.catalog, &selection);

    output(&FacetOptionsResponse { selection, options }, flags)
}
