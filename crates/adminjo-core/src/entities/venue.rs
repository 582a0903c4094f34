use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A physical site hosting sessions (a "lieu").
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Venue {
    pub id: u32,
    #[serde(alias = "nom")]
    pub name: String,
}
