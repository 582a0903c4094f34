//! Session status and filter facet enums for AdminJO.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`SessionStatus`] is derived from the clock and never stored; [`Facet`] carries
//! the cascade dependency table used to invalidate downstream filter selections.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SessionStatus
// ---------------------------------------------------------------------------

/// Temporal lifecycle of a scheduled competition session.
///
/// ```text
/// upcoming → ongoing → completed
/// ```
///
/// Variants are declared in lifecycle order, so `Ord` follows the timeline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl SessionStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Upcoming, Self::Ongoing, Self::Completed];

    /// States a session can reach next as time passes.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Upcoming => &[Self::Ongoing, Self::Completed],
            Self::Ongoing => &[Self::Completed],
            Self::Completed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Upcoming and ongoing sessions are still "active" for the dashboard.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Upcoming | Self::Ongoing)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Facet
// ---------------------------------------------------------------------------

/// A dependent filter dropdown of the sessions screen.
///
/// ```text
/// venue → discipline → epreuve → status
/// ```
///
/// Search text and the date range sit outside this chain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Venue,
    Discipline,
    Epreuve,
    Status,
}

impl Facet {
    /// Facets whose selection is cleared when this facet changes value.
    #[must_use]
    pub const fn downstream(self) -> &'static [Self] {
        match self {
            Self::Venue => &[Self::Discipline, Self::Epreuve, Self::Status],
            Self::Discipline => &[Self::Epreuve, Self::Status],
            Self::Epreuve => &[Self::Status],
            Self::Status => &[],
        }
    }

    #[must_use]
    pub fn is_upstream_of(self, other: Self) -> bool {
        self.downstream().contains(&other)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Venue => "venue",
            Self::Discipline => "discipline",
            Self::Epreuve => "epreuve",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
