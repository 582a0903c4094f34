//! Response types returned as JSON by `adminjo` commands.
//!
//! These structs define the shape of output for `adminjo events list`,
//! `adminjo events options` and `adminjo events stats`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Discipline, Epreuve};
use crate::enums::SessionStatus;
use crate::selection::FilterSelection;
use crate::stats::StatusCounts;

/// One row of the sessions table. `status` is `None` when the schedule is malformed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionView {
    pub id: u32,
    pub date: String,
    pub time: String,
    pub venue: Option<String>,
    pub description: String,
    pub sports: String,
    pub status: Option<SessionStatus>,
}

/// Option sets of the dependent dropdowns for a selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FacetOptions {
    pub disciplines: Vec<Discipline>,
    pub epreuves: Vec<Epreuve>,
    pub statuses: Vec<SessionStatus>,
}

/// Response from `adminjo events options`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FacetOptionsResponse {
    pub selection: FilterSelection,
    pub options: FacetOptions,
}

/// Response from `adminjo events stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatsResponse {
    pub selection: FilterSelection,
    pub counts: StatusCounts,
}
