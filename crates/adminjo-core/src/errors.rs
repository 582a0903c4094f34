//! Error types for AdminJO core.
//!
//! The filter engine is total over its inputs and never fails; errors only come
//! from temporal parsing and catalog lookups. A unified error is deferred to
//! `adminjo-cli` where all crate errors converge.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A session date or time could not be parsed.
    #[error("Invalid temporal input for {field}: '{value}'")]
    InvalidTemporalInput { field: &'static str, value: String },

    /// Catalog lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: u32 },
}

impl CoreError {
    pub(crate) fn not_found(entity_type: &str, id: u32) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id,
        }
    }
}
