use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An Olympic sport category, e.g. swimming.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Discipline {
    pub id: u32,
    #[serde(alias = "nom")]
    pub name: String,
    /// Opaque icon reference owned by the presentation layer.
    #[serde(default, alias = "icone")]
    pub icon: String,
}
