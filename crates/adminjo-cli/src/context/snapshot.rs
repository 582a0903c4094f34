use std::path::Path;

use adminjo_core::catalog::Catalog;
use adminjo_core::entities::Session;
use anyhow::Context;
use serde::de::DeserializeOwned;

const VENUES_FILE: &str = "lieux.json";
const DISCIPLINES_FILE: &str = "disciplines.json";
const EPREUVES_FILE: &str = "epreuves.json";
const SESSIONS_FILE: &str = "evenements.json";

/// JSON exports of the API collections, loaded from the data directory.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub catalog: Catalog,
    pub sessions: Vec<Session>,
}

impl Snapshot {
    /// Load every collection under `dir`. A missing file yields an empty
    /// collection and a warning; a malformed one is an error.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let snapshot = Self {
            catalog: Catalog {
                venues: read_collection(dir, VENUES_FILE)?,
                disciplines: read_collection(dir, DISCIPLINES_FILE)?,
                epreuves: read_collection(dir, EPREUVES_FILE)?,
            },
            sessions: read_collection(dir, SESSIONS_FILE)?,
        };

        tracing::debug!(
            dir = %dir.display(),
            venues = snapshot.catalog.venues.len(),
            disciplines = snapshot.catalog.disciplines.len(),
            epreuves = snapshot.catalog.epreuves.len(),
            sessions = snapshot.sessions.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }
}

fn read_collection<T: DeserializeOwned>(dir: &Path, file: &str) -> anyhow::Result<Vec<T>> {
    let path = dir.join(file);
    if !path.is_file() {
        tracing::warn!(path = %path.display(), "snapshot file missing; treating collection as empty");
        return Ok(Vec::new());
    }

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
