use adminjo_core::catalog::Catalog;
use adminjo_core::enums::SessionStatus;
use adminjo_core::selection::FilterSelection;
use chrono::NaiveDateTime;

use crate::cli::subcommands::{ChainArgs, FilterArgs};
use crate::commands::shared::parse::{parse_day, parse_enum, parse_instant};

/// Build a selection from the venue, discipline and épreuve flags.
///
/// Facets are selected top-down so the cascade leaves every given flag set.
/// Each id must exist in the catalog.
pub fn chain_selection(args: &ChainArgs, catalog: &Catalog) -> anyhow::Result<FilterSelection> {
    let mut selection = FilterSelection::default();
    if let Some(id) = args.venue {
        catalog.venue(id)?;
        selection.select_venue(Some(id));
    }
    if let Some(id) = args.discipline {
        catalog.discipline(id)?;
        selection.select_discipline(Some(id));
    }
    if let Some(id) = args.epreuve {
        catalog.epreuve(id)?;
        selection.select_epreuve(Some(id));
    }
    Ok(selection)
}

/// Build the full selection of `events list` and `events stats`.
pub fn filter_selection(args: &FilterArgs, catalog: &Catalog) -> anyhow::Result<FilterSelection> {
    let mut selection = chain_selection(&args.facets, catalog)?;

    if let Some(raw) = args.status.as_deref() {
        selection.select_status(Some(parse_enum::<SessionStatus>(raw, "status")?));
    }
    if let Some(text) = args.search.as_deref() {
        selection.set_search_text(text);
    }

    let from = args
        .from
        .as_deref()
        .map(|raw| parse_day(raw, "--from"))
        .transpose()?;
    let to = args
        .to
        .as_deref()
        .map(|raw| parse_day(raw, "--to"))
        .transpose()?;
    if let (Some(from), Some(to)) = (from, to) {
        anyhow::ensure!(from <= to, "--from ({from}) is after --to ({to})");
    }
    selection.set_date_range(from, to);

    Ok(selection)
}

/// The `--at` instant, if given.
pub fn reference_instant(args: &ChainArgs) -> anyhow::Result<Option<NaiveDateTime>> {
    args.at
        .as_deref()
        .map(|raw| parse_instant(raw, "--at"))
        .transpose()
}
