//! Location of the API snapshot files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_dir() -> PathBuf {
    PathBuf::from("data")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// Directory holding `lieux.json`, `disciplines.json`, `epreuves.json`
    /// and `evenements.json`.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}
