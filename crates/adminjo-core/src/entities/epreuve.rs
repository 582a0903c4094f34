use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Discipline;

/// A specific competitive event within a discipline, e.g. "100m freestyle".
///
/// The discipline is optional: snapshots loaded from the API are not guaranteed
/// to be fully populated, and every consumer must tolerate a missing one.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Epreuve {
    pub id: u32,
    #[serde(alias = "libelle")]
    pub label: String,
    #[serde(default)]
    pub discipline: Option<Discipline>,
    #[serde(default, alias = "genre", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, alias = "tour", skip_serializing_if = "Option::is_none")]
    pub round: Option<String>,
}

impl Epreuve {
    #[must_use]
    pub fn discipline_id(&self) -> Option<u32> {
        self.discipline.as_ref().map(|d| d.id)
    }

    /// Discipline name used as the primary sort key; a missing discipline sorts first.
    #[must_use]
    pub fn discipline_name(&self) -> &str {
        self.discipline.as_ref().map_or("", |d| d.name.as_str())
    }

    #[must_use]
    pub fn belongs_to(&self, discipline_id: u32) -> bool {
        self.discipline_id() == Some(discipline_id)
    }
}
