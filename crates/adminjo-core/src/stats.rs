//! Status tallies over a set of sessions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::entities::Session;
use crate::enums::SessionStatus;
use crate::status::StatusResolver;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: u32,
    pub upcoming: u32,
    pub ongoing: u32,
    pub completed: u32,
    /// Upcoming plus ongoing sessions.
    pub active: u32,
    /// Sessions whose date or time could not be parsed.
    pub unknown: u32,
}

impl StatusCounts {
    pub fn tally<C: Clock>(resolver: &StatusResolver<C>, sessions: &[Session]) -> Self {
        sessions.iter().fold(Self::default(), |mut counts, session| {
            counts.record(resolver.try_resolve(session));
            counts
        })
    }

    pub const fn record(&mut self, status: Option<SessionStatus>) {
        self.total += 1;
        let Some(status) = status else {
            self.unknown += 1;
            return;
        };
        if status.is_active() {
            self.active += 1;
        }
        match status {
            SessionStatus::Upcoming => self.upcoming += 1,
            SessionStatus::Ongoing => self.ongoing += 1,
            SessionStatus::Completed => self.completed += 1,
        }
    }
}
