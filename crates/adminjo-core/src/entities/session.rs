use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Epreuve, Venue};

/// Label shown when a session has no épreuve attached.
pub const UNSPECIFIED_SPORTS: &str = "Non spécifié";

/// A scheduled competition slot (an "évènement") at a venue, on a date and time,
/// covering zero or more épreuves.
///
/// `date` and `time` are kept exactly as the API delivered them; parsing happens
/// in [`crate::status`]. The status itself is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    pub id: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, alias = "horraire", alias = "horaire")]
    pub time: String,
    #[serde(default, alias = "lieu")]
    pub venue: Option<Venue>,
    #[serde(default)]
    pub epreuves: Vec<Epreuve>,
}

impl Session {
    #[must_use]
    pub fn venue_id(&self) -> Option<u32> {
        self.venue.as_ref().map(|v| v.id)
    }

    #[must_use]
    pub fn venue_name(&self) -> Option<&str> {
        self.venue.as_ref().map(|v| v.name.as_str())
    }

    /// Whether any épreuve of this session belongs to the discipline.
    #[must_use]
    pub fn has_discipline(&self, discipline_id: u32) -> bool {
        self.epreuves.iter().any(|e| e.belongs_to(discipline_id))
    }

    #[must_use]
    pub fn has_epreuve(&self, epreuve_id: u32) -> bool {
        self.epreuves.iter().any(|e| e.id == epreuve_id)
    }

    /// Épreuve labels joined for the table's "sports" column.
    #[must_use]
    pub fn sports_summary(&self) -> String {
        if self.epreuves.is_empty() {
            return UNSPECIFIED_SPORTS.to_string();
        }
        self.epreuves
            .iter()
            .map(|e| e.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Discipline;

    fn epreuve(id: u32, label: &str, discipline: Option<u32>) -> Epreuve {
        Epreuve {
            id,
            label: label.into(),
            discipline: discipline.map(|id| Discipline {
                id,
                name: format!("discipline-{id}"),
                icon: String::new(),
            }),
            gender: None,
            round: None,
        }
    }

    fn session(epreuves: Vec<Epreuve>) -> Session {
        Session {
            id: 1,
            description: "Finale".into(),
            date: "2024-07-28".into(),
            time: "20:30".into(),
            venue: None,
            epreuves,
        }
    }

    #[test]
    fn missing_discipline_never_matches() {
        let s = session(vec![epreuve(1, "100m", None)]);
        assert!(!s.has_discipline(1));
        assert!(s.has_epreuve(1));
        assert_eq!(s.venue_id(), None);
    }

    #[test]
    fn sports_summary_joins_labels() {
        let s = session(vec![epreuve(1, "100m", Some(3)), epreuve(2, "200m", Some(3))]);
        assert_eq!(s.sports_summary(), "100m, 200m");
        assert_eq!(session(vec![]).sports_summary(), UNSPECIFIED_SPORTS);
    }

    #[test]
    fn loads_api_wire_names() {
        let json = r#"{
            "id": 7,
            "description": "Finale 100m",
            "lieu": {"id": 2, "nom": "Stade de France"},
            "date": "2024-08-04",
            "horraire": "21:50",
            "epreuves": [
                {"id": 11, "libelle": "100m hommes", "genre": "hommes", "tour": "finale",
                 "discipline": {"id": 1, "nom": "Athlétisme", "icone": "athletics.svg"}}
            ]
        }"#;
        let s: Session = serde_json::from_str(json).unwrap();
        assert_eq!(s.venue_name(), Some("Stade de France"));
        assert_eq!(s.time, "21:50");
        assert_eq!(s.epreuves[0].label, "100m hommes");
        assert_eq!(s.epreuves[0].round.as_deref(), Some("finale"));
        assert!(s.has_discipline(1));
    }

    #[test]
    fn tolerates_sparse_records() {
        let s: Session = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert!(s.description.is_empty());
        assert!(s.venue.is_none());
        assert!(s.epreuves.is_empty());
    }
}
