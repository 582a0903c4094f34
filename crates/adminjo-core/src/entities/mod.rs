//! Entity structs for the AdminJO domain objects.
//!
//! Each entity mirrors a collection of the AdminJO REST API. Field names are
//! English; the API's French wire names (`nom`, `libelle`, `lieu`, `horraire`, ...)
//! are accepted as serde aliases so snapshots exported from the API load as-is.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod discipline;
mod epreuve;
mod session;
mod venue;

pub use discipline::Discipline;
pub use epreuve::Epreuve;
pub use session::Session;
pub use venue::Venue;
