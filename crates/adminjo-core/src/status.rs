//! Session status resolution.
//!
//! A session starting at `T` is upcoming while `now < T`, ongoing while
//! `T <= now < T + window`, and completed afterwards. The window defaults to two
//! hours. Inputs are trimmed; an empty or malformed date or time is rejected with
//! [`CoreError::InvalidTemporalInput`] rather than guessed at.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::clock::Clock;
use crate::entities::Session;
use crate::enums::SessionStatus;
use crate::errors::CoreError;

/// How long a session stays ongoing after its start, in minutes.
pub const DEFAULT_ONGOING_WINDOW_MINUTES: i64 = 120;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
        CoreError::InvalidTemporalInput {
            field: "date",
            value: raw.to_string(),
        }
    })
}

/// Parse a 24-hour `HH:MM` or `HH:MM:SS` time.
pub fn parse_time(raw: &str) -> Result<NaiveTime, CoreError> {
    let trimmed = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| CoreError::InvalidTemporalInput {
            field: "time",
            value: raw.to_string(),
        })
}

/// Combine a session's date and time into its start instant.
pub fn parse_schedule(date: &str, time: &str) -> Result<NaiveDateTime, CoreError> {
    Ok(parse_date(date)?.and_time(parse_time(time)?))
}

/// Status of a session starting at `start`, observed at `now`.
#[must_use]
pub fn status_at(start: NaiveDateTime, now: NaiveDateTime, window: TimeDelta) -> SessionStatus {
    if now < start {
        return SessionStatus::Upcoming;
    }
    match start.checked_add_signed(window) {
        Some(end) if now >= end => SessionStatus::Completed,
        // An end past chrono's range never arrives.
        _ => SessionStatus::Ongoing,
    }
}

/// Resolves session statuses against an injected clock.
#[derive(Debug, Clone)]
pub struct StatusResolver<C> {
    clock: C,
    window: TimeDelta,
}

impl<C: Clock> StatusResolver<C> {
    pub fn new(clock: C) -> Self {
        Self::with_window(clock, TimeDelta::minutes(DEFAULT_ONGOING_WINDOW_MINUTES))
    }

    pub const fn with_window(clock: C, window: TimeDelta) -> Self {
        Self { clock, window }
    }

    /// Resolve the status of a raw `(date, time)` pair. Reads the clock on every call.
    pub fn resolve(&self, date: &str, time: &str) -> Result<SessionStatus, CoreError> {
        let start = parse_schedule(date, time)?;
        Ok(status_at(start, self.clock.now(), self.window))
    }

    pub fn resolve_session(&self, session: &Session) -> Result<SessionStatus, CoreError> {
        self.resolve(&session.date, &session.time)
    }

    /// Resolve a session's status, mapping malformed schedules to `None` ("unknown").
    pub fn try_resolve(&self, session: &Session) -> Option<SessionStatus> {
        match self.resolve_session(session) {
            Ok(status) => Some(status),
            Err(error) => {
                tracing::debug!(session_id = session.id, %error, "session status is unknown");
                None
            }
        }
    }
}
