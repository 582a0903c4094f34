//! Filter selection state and its cascade rules.
//!
//! Selecting a different value in a facet clears every facet downstream of it
//! (see [`Facet::downstream`]) because a previous downstream choice may no longer
//! be offered. Re-selecting the current value is a no-op. Search text and the
//! date range are independent of the chain.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Facet, SessionStatus};

/// Inclusive date range applied when a selection leaves a bound unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    #[must_use]
    pub const fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

impl Default for DateWindow {
    /// The Paris 2024 games period: 2024-07-01 to 2024-09-01.
    fn default() -> Self {
        Self {
            from: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap_or_default(),
            to: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap_or_default(),
        }
    }
}

/// Transient filter state of the sessions screen. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FilterSelection {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub venue_id: Option<u32>,
    #[serde(default)]
    pub discipline_id: Option<u32>,
    #[serde(default)]
    pub epreuve_id: Option<u32>,
    #[serde(default)]
    pub status: Option<SessionStatus>,
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
}

impl FilterSelection {
    #[must_use]
    pub fn is_set(&self, facet: Facet) -> bool {
        match facet {
            Facet::Venue => self.venue_id.is_some(),
            Facet::Discipline => self.discipline_id.is_some(),
            Facet::Epreuve => self.epreuve_id.is_some(),
            Facet::Status => self.status.is_some(),
        }
    }

    pub fn clear(&mut self, facet: Facet) {
        match facet {
            Facet::Venue => self.venue_id = None,
            Facet::Discipline => self.discipline_id = None,
            Facet::Epreuve => self.epreuve_id = None,
            Facet::Status => self.status = None,
        }
    }

    /// Select a venue. Returns the downstream facets that were cleared.
    pub fn select_venue(&mut self, venue_id: Option<u32>) -> Vec<Facet> {
        if self.venue_id == venue_id {
            return Vec::new();
        }
        self.venue_id = venue_id;
        self.invalidate_downstream(Facet::Venue)
    }

    pub fn select_discipline(&mut self, discipline_id: Option<u32>) -> Vec<Facet> {
        if self.discipline_id == discipline_id {
            return Vec::new();
        }
        self.discipline_id = discipline_id;
        self.invalidate_downstream(Facet::Discipline)
    }

    pub fn select_epreuve(&mut self, epreuve_id: Option<u32>) -> Vec<Facet> {
        if self.epreuve_id == epreuve_id {
            return Vec::new();
        }
        self.epreuve_id = epreuve_id;
        self.invalidate_downstream(Facet::Epreuve)
    }

    pub fn select_status(&mut self, status: Option<SessionStatus>) -> Vec<Facet> {
        if self.status == status {
            return Vec::new();
        }
        self.status = status;
        self.invalidate_downstream(Facet::Status)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub const fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.date_from = from;
        self.date_to = to;
    }

    /// Date range in effect, with unset bounds taken from `defaults`.
    #[must_use]
    pub fn effective_window(&self, defaults: DateWindow) -> DateWindow {
        DateWindow::new(
            self.date_from.unwrap_or(defaults.from),
            self.date_to.unwrap_or(defaults.to),
        )
    }

    fn invalidate_downstream(&mut self, changed: Facet) -> Vec<Facet> {
        let cleared: Vec<Facet> = changed
            .downstream()
            .iter()
            .copied()
            .filter(|facet| self.is_set(*facet))
            .collect();
        for facet in &cleared {
            self.clear(*facet);
        }
        if !cleared.is_empty() {
            tracing::debug!(%changed, ?cleared, "cleared downstream filter selections");
        }
        cleared
    }
}
