//! Cascading multi-facet filter engine for the sessions screen.
//!
//! [`FilterEngine::filtered_sessions`] narrows the session list with every active
//! filter, in a fixed order: search, venue, discipline, épreuve, status, date range.
//! The `available_*` functions compute the values each dependent dropdown may offer.
//! They apply only the facets upstream of the one being computed, so a deeper
//! selection never prunes a higher-level option list.
//!
//! Everything here is total: missing venues, missing disciplines and malformed
//! schedules count as "no match", never as errors.

use std::collections::{BTreeSet, HashSet};

use crate::catalog::Catalog;
use crate::collation::collate;
use crate::clock::Clock;
use crate::entities::{Discipline, Epreuve, Session};
use crate::enums::{Facet, SessionStatus};
use crate::responses::{FacetOptions, SessionView};
use crate::selection::{DateWindow, FilterSelection};
use crate::status::{StatusResolver, parse_date};

/// Case-insensitive substring match against description, venue name or any
/// épreuve label. A blank search matches everything; otherwise surrounding
/// whitespace is part of the needle.
#[must_use]
pub fn matches_search(session: &Session, search_text: &str) -> bool {
    if search_text.trim().is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    session.description.to_lowercase().contains(&needle)
        || session
            .venue_name()
            .is_some_and(|name| name.to_lowercase().contains(&needle))
        || session
            .epreuves
            .iter()
            .any(|e| e.label.to_lowercase().contains(&needle))
}

/// Whether `session` passes the venue/discipline/épreuve filters of `selection`,
/// up to and including `through`.
fn passes_chain(session: &Session, selection: &FilterSelection, through: Facet) -> bool {
    if let Some(venue_id) = selection.venue_id {
        if session.venue_id() != Some(venue_id) {
            return false;
        }
    }
    if through >= Facet::Discipline {
        if let Some(discipline_id) = selection.discipline_id {
            if !session.has_discipline(discipline_id) {
                return false;
            }
        }
    }
    if through >= Facet::Epreuve {
        if let Some(epreuve_id) = selection.epreuve_id {
            if !session.has_epreuve(epreuve_id) {
                return false;
            }
        }
    }
    true
}

fn within_window(session: &Session, window: DateWindow) -> bool {
    parse_date(&session.date).is_ok_and(|date| window.contains(date))
}

/// Disciplines selectable given the venue selection alone.
///
/// Without a venue this is the whole discipline catalog. With one, it is the
/// distinct disciplines (first-seen order) of the épreuves scheduled at that
/// venue, taken from the catalog when it knows the id.
#[must_use]
pub fn available_disciplines(
    sessions: &[Session],
    catalog: &[Discipline],
    selection: &FilterSelection,
) -> Vec<Discipline> {
    if selection.venue_id.is_none() {
        return catalog.to_vec();
    }

    let mut seen = HashSet::new();
    sessions
        .iter()
        .filter(|s| passes_chain(s, selection, Facet::Venue))
        .flat_map(|s| s.epreuves.iter())
        .filter_map(|e| e.discipline.as_ref())
        .filter(|d| seen.insert(d.id))
        .map(|d| {
            catalog
                .iter()
                .find(|known| known.id == d.id)
                .unwrap_or(d)
                .clone()
        })
        .collect()
}

/// Épreuves selectable given the venue and discipline selections.
///
/// When a discipline is selected only its épreuves are offered. The result is
/// sorted by discipline name, then label.
#[must_use]
pub fn available_epreuves(
    sessions: &[Session],
    catalog: &[Epreuve],
    selection: &FilterSelection,
) -> Vec<Epreuve> {
    let mut seen = HashSet::new();
    let mut epreuves: Vec<Epreuve> = sessions
        .iter()
        .filter(|s| passes_chain(s, selection, Facet::Discipline))
        .flat_map(|s| s.epreuves.iter())
        .filter(|e| selection.discipline_id.is_none_or(|id| e.belongs_to(id)))
        .filter(|e| seen.insert(e.id))
        .map(|e| {
            catalog
                .iter()
                .find(|known| known.id == e.id)
                .unwrap_or(e)
                .clone()
        })
        .collect();

    sort_epreuves(&mut epreuves);
    epreuves
}

/// Sort by `(discipline name, label)` in dictionary order; épreuves without
/// discipline come first.
pub fn sort_epreuves(epreuves: &mut [Epreuve]) {
    epreuves.sort_by(|a, b| {
        collate(a.discipline_name(), b.discipline_name())
            .then_with(|| collate(&a.label, &b.label))
    });
}

/// Computes filtered session lists and dropdown options against a clock.
#[derive(Debug, Clone)]
pub struct FilterEngine<C> {
    resolver: StatusResolver<C>,
    default_window: DateWindow,
}

impl<C: Clock> FilterEngine<C> {
    pub fn new(resolver: StatusResolver<C>) -> Self {
        Self {
            resolver,
            default_window: DateWindow::default(),
        }
    }

    /// Override the date range used when a selection leaves a bound unset.
    #[must_use]
    pub const fn with_default_window(mut self, window: DateWindow) -> Self {
        self.default_window = window;
        self
    }

    pub const fn resolver(&self) -> &StatusResolver<C> {
        &self.resolver
    }

    /// Sessions surviving every active filter, in their original order.
    ///
    /// With a status filter active, sessions whose status cannot be resolved are
    /// dropped; otherwise they are kept.
    pub fn filtered_sessions(
        &self,
        sessions: &[Session],
        selection: &FilterSelection,
    ) -> Vec<Session> {
        let window = selection.effective_window(self.default_window);
        let filtered: Vec<Session> = sessions
            .iter()
            .filter(|s| matches_search(s, &selection.search_text))
            .filter(|s| passes_chain(s, selection, Facet::Epreuve))
            .filter(|s| {
                selection
                    .status
                    .is_none_or(|wanted| self.resolver.try_resolve(s) == Some(wanted))
            })
            .filter(|s| within_window(s, window))
            .cloned()
            .collect();

        tracing::debug!(
            total = sessions.len(),
            kept = filtered.len(),
            "filtered sessions"
        );
        filtered
    }

    /// Statuses observed among sessions passing the venue, discipline and épreuve
    /// filters, in lifecycle order. Unresolvable sessions contribute nothing.
    pub fn available_statuses(
        &self,
        sessions: &[Session],
        selection: &FilterSelection,
    ) -> Vec<SessionStatus> {
        sessions
            .iter()
            .filter(|s| passes_chain(s, selection, Facet::Epreuve))
            .filter_map(|s| self.resolver.try_resolve(s))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every dropdown's option set for the current selection.
    pub fn options(
        &self,
        sessions: &[Session],
        catalog: &Catalog,
        selection: &FilterSelection,
    ) -> FacetOptions {
        FacetOptions {
            disciplines: available_disciplines(sessions, &catalog.disciplines, selection),
            epreuves: available_epreuves(sessions, &catalog.epreuves, selection),
            statuses: self.available_statuses(sessions, selection),
        }
    }

    /// Table row for a session, with its status resolved now.
    pub fn view(&self, session: &Session) -> SessionView {
        SessionView {
            id: session.id,
            date: session.date.clone(),
            time: session.time.clone(),
            venue: session.venue_name().map(str::to_string),
            description: session.description.clone(),
            sports: session.sports_summary(),
            status: self.resolver.try_resolve(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::clock::FixedClock;
    use crate::entities::Venue;
    use crate::status::parse_schedule;

    fn discipline(id: u32, name: &str) -> Discipline {
        Discipline {
            id,
            name: name.into(),
            icon: String::new(),
        }
    }

    fn epreuve(id: u32, label: &str, discipline: Option<Discipline>) -> Epreuve {
        Epreuve {
            id,
            label: label.into(),
            discipline,
            gender: None,
            round: None,
        }
    }

    fn session(id: u32, venue: u32, date: &str, time: &str, epreuves: Vec<Epreuve>) -> Session {
        Session {
            id,
            description: format!("Session {id}"),
            date: date.into(),
            time: time.into(),
            venue: Some(Venue {
                id: venue,
                name: format!("Venue {venue}"),
            }),
            epreuves,
        }
    }

    fn engine() -> FilterEngine<FixedClock> {
        let now = parse_schedule("2024-07-28", "18:00").unwrap();
        FilterEngine::new(StatusResolver::new(FixedClock(now)))
    }

    fn ids(sessions: &[Session]) -> Vec<u32> {
        sessions.iter().map(|s| s.id).collect()
    }

    #[test]
    fn search_is_case_insensitive_and_covers_venue_and_labels() {
        let swim = discipline(1, "Swimming");
        let s = session(1, 7, "2024-07-28", "20:30", vec![epreuve(5, "100m Freestyle", Some(swim))]);
        assert!(matches_search(&s, "SESSION"));
        assert!(matches_search(&s, "venue 7"));
        assert!(matches_search(&s, "freestyle"));
        assert!(matches_search(&s, "   "));
        assert!(!matches_search(&s, "butterfly"));
    }

    #[test]
    fn search_keeps_surrounding_whitespace() {
        let s = session(1, 7, "2024-07-28", "20:30", vec![epreuve(5, "Final 100m", None)]);
        assert!(matches_search(&s, "100m"));
        assert!(!matches_search(&s, "100m "));
        assert!(matches_search(&s, " 100m"));
    }

    #[test]
    fn search_tolerates_missing_venue() {
        let mut s = session(1, 7, "2024-07-28", "20:30", vec![]);
        s.venue = None;
        assert!(!matches_search(&s, "venue"));
    }

    #[test]
    fn discipline_filter_ignores_epreuves_without_discipline() {
        let sessions = vec![
            session(1, 1, "2024-07-28", "10:00", vec![epreuve(5, "Orphan", None)]),
            session(
                2,
                1,
                "2024-07-28",
                "10:00",
                vec![epreuve(6, "100m", Some(discipline(1, "Swimming")))],
            ),
        ];
        let selection = FilterSelection {
            discipline_id: Some(1),
            ..FilterSelection::default()
        };
        assert_eq!(ids(&engine().filtered_sessions(&sessions, &selection)), vec![2]);
    }

    #[test]
    fn date_range_is_inclusive_and_defaults_to_games_period() {
        let sessions = vec![
            session(1, 1, "2024-06-30", "10:00", vec![]),
            session(2, 1, "2024-07-01", "10:00", vec![]),
            session(3, 1, "2024-09-01", "10:00", vec![]),
            session(4, 1, "2024-09-02", "10:00", vec![]),
            session(5, 1, "not a date", "10:00", vec![]),
        ];
        let engine = engine();
        assert_eq!(
            ids(&engine.filtered_sessions(&sessions, &FilterSelection::default())),
            vec![2, 3]
        );

        let narrowed = FilterSelection {
            date_from: NaiveDate::from_ymd_opt(2024, 9, 1),
            date_to: NaiveDate::from_ymd_opt(2024, 9, 30),
            ..FilterSelection::default()
        };
        assert_eq!(ids(&engine.filtered_sessions(&sessions, &narrowed)), vec![3, 4]);
    }

    #[test]
    fn status_filter_drops_unresolvable_sessions() {
        let sessions = vec![
            session(1, 1, "2024-07-28", "20:30", vec![]),
            session(2, 1, "2024-07-28", "", vec![]),
            session(3, 1, "2024-07-27", "20:30", vec![]),
        ];
        let engine = engine();
        let upcoming = FilterSelection {
            status: Some(SessionStatus::Upcoming),
            ..FilterSelection::default()
        };
        assert_eq!(ids(&engine.filtered_sessions(&sessions, &upcoming)), vec![1]);
        assert_eq!(
            ids(&engine.filtered_sessions(&sessions, &FilterSelection::default())),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn available_epreuves_sorted_by_discipline_then_label() {
        let athletics = discipline(2, "Athletics");
        let swimming = discipline(1, "Swimming");
        let sessions = vec![
            session(
                1,
                1,
                "2024-07-28",
                "10:00",
                vec![
                    epreuve(10, "200m", Some(swimming.clone())),
                    epreuve(11, "100m", Some(swimming.clone())),
                ],
            ),
            session(
                2,
                1,
                "2024-07-29",
                "10:00",
                vec![
                    epreuve(20, "Marathon", Some(athletics.clone())),
                    epreuve(11, "100m", Some(swimming)),
                    epreuve(30, "Orphan", None),
                ],
            ),
        ];
        let labels: Vec<String> = available_epreuves(&sessions, &[], &FilterSelection::default())
            .into_iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(labels, vec!["Orphan", "Marathon", "100m", "200m"]);
    }

    #[test]
    fn accented_disciplines_group_in_dictionary_order() {
        let epreuves = [(1, "Voile"), (2, "Équitation"), (3, "Escrime")]
            .into_iter()
            .map(|(id, name)| epreuve(id, "Finale", Some(discipline(id, name))))
            .collect();
        let sessions = vec![session(1, 1, "2024-07-28", "10:00", epreuves)];

        let groups: Vec<String> = available_epreuves(&sessions, &[], &FilterSelection::default())
            .iter()
            .map(|e| e.discipline_name().to_string())
            .collect();
        assert_eq!(groups, vec!["Équitation", "Escrime", "Voile"]);
    }

    #[test]
    fn available_epreuves_restricted_to_selected_discipline() {
        let athletics = discipline(2, "Athletics");
        let swimming = discipline(1, "Swimming");
        let sessions = vec![session(
            1,
            1,
            "2024-07-28",
            "10:00",
            vec![
                epreuve(10, "200m", Some(swimming)),
                epreuve(20, "Marathon", Some(athletics)),
            ],
        )];
        let selection = FilterSelection {
            discipline_id: Some(1),
            ..FilterSelection::default()
        };
        let offered: Vec<u32> = available_epreuves(&sessions, &[], &selection)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(offered, vec![10]);
    }

    #[test]
    fn catalog_entries_replace_embedded_copies() {
        let stale = discipline(1, "Natation (old)");
        let fresh = discipline(1, "Natation");
        let sessions = vec![session(
            1,
            4,
            "2024-07-28",
            "10:00",
            vec![epreuve(10, "200m", Some(stale))],
        )];
        let selection = FilterSelection {
            venue_id: Some(4),
            ..FilterSelection::default()
        };
        assert_eq!(
            available_disciplines(&sessions, &[fresh.clone()], &selection),
            vec![fresh]
        );
    }

    #[test]
    fn available_statuses_in_lifecycle_order() {
        let sessions = vec![
            session(1, 1, "2024-07-28", "20:30", vec![]),
            session(2, 1, "2024-07-27", "09:00", vec![]),
            session(3, 1, "2024-07-28", "17:00", vec![]),
            session(4, 1, "garbage", "17:00", vec![]),
            session(5, 2, "2024-07-28", "20:30", vec![]),
        ];
        let engine = engine();
        assert_eq!(
            engine.available_statuses(&sessions, &FilterSelection::default()),
            vec![
                SessionStatus::Upcoming,
                SessionStatus::Ongoing,
                SessionStatus::Completed
            ]
        );
        let venue_two = FilterSelection {
            venue_id: Some(2),
            status: Some(SessionStatus::Completed),
            ..FilterSelection::default()
        };
        assert_eq!(
            engine.available_statuses(&sessions, &venue_two),
            vec![SessionStatus::Upcoming]
        );
    }

    #[test]
    fn view_carries_status_and_sports() {
        let s = session(
            1,
            1,
            "2024-07-28",
            "20:30",
            vec![epreuve(5, "100m", None), epreuve(6, "200m", None)],
        );
        let view = engine().view(&s);
        assert_eq!(view.sports, "100m, 200m");
        assert_eq!(view.venue.as_deref(), Some("Venue 1"));
        assert_eq!(view.status, Some(SessionStatus::Upcoming));
    }
}
