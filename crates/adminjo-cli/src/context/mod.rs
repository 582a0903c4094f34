mod app_context;
mod config_warnings;
mod snapshot;

pub use app_context::{AppContext, CommandClock};
pub use config_warnings::warn_unconfigured;
pub use snapshot::Snapshot;
