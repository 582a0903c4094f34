//! Reference collections (venues, disciplines, épreuves) and their listings.
//!
//! Listings mirror the management screens: venues and disciplines sorted by
//! name, épreuves grouped by discipline name then label, each optionally
//! narrowed by a case-insensitive name search.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::collation::collate;
use crate::entities::{Discipline, Epreuve, Venue};
use crate::errors::CoreError;
use crate::filter::sort_epreuves;

/// In-memory snapshot of the reference collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Catalog {
    #[serde(default)]
    pub venues: Vec<Venue>,
    #[serde(default)]
    pub disciplines: Vec<Discipline>,
    #[serde(default)]
    pub epreuves: Vec<Epreuve>,
}

fn name_matches(name: &str, search: Option<&str>) -> bool {
    search
        .map(str::trim)
        .filter(|needle| !needle.is_empty())
        .is_none_or(|needle| name.to_lowercase().contains(&needle.to_lowercase()))
}

impl Catalog {
    pub fn venue(&self, id: u32) -> Result<&Venue, CoreError> {
        self.venues
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| CoreError::not_found("venue", id))
    }

    pub fn discipline(&self, id: u32) -> Result<&Discipline, CoreError> {
        self.disciplines
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| CoreError::not_found("discipline", id))
    }

    pub fn epreuve(&self, id: u32) -> Result<&Epreuve, CoreError> {
        self.epreuves
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::not_found("epreuve", id))
    }

    /// Venues whose name contains `search`, sorted by name.
    #[must_use]
    pub fn list_venues(&self, search: Option<&str>) -> Vec<Venue> {
        let mut venues: Vec<Venue> = self
            .venues
            .iter()
            .filter(|v| name_matches(&v.name, search))
            .cloned()
            .collect();
        venues.sort_by(|a, b| collate(&a.name, &b.name));
        venues
    }

    /// Disciplines whose name contains `search`, sorted by name.
    #[must_use]
    pub fn list_disciplines(&self, search: Option<&str>) -> Vec<Discipline> {
        let mut disciplines: Vec<Discipline> = self
            .disciplines
            .iter()
            .filter(|d| name_matches(&d.name, search))
            .cloned()
            .collect();
        disciplines.sort_by(|a, b| collate(&a.name, &b.name));
        disciplines
    }

    /// Épreuves of `discipline_id` (or all) whose label contains `search`,
    /// sorted by discipline name then label.
    #[must_use]
    pub fn list_epreuves(&self, discipline_id: Option<u32>, search: Option<&str>) -> Vec<Epreuve> {
        let mut epreuves: Vec<Epreuve> = self
            .epreuves
            .iter()
            .filter(|e| discipline_id.is_none_or(|id| e.belongs_to(id)))
            .filter(|e| name_matches(&e.label, search))
            .cloned()
            .collect();
        sort_epreuves(&mut epreuves);
        epreuves
    }
}
