//! # adminjo-config
//!
//! Layered configuration loading for AdminJO using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ADMINJO_*` prefix, `__` as separator)
//! 2. Project-level `.adminjo/config.toml`
//! 3. User-level `~/.config/adminjo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ADMINJO_STATUS__ONGOING_WINDOW_MINUTES` -> `status.ongoing_window_minutes`,
//! `ADMINJO_DATA__DIR` -> `data.dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use adminjo_config::AdminConfig;
//!
//! let config = AdminConfig::load_with_dotenv().expect("config");
//! let window = config.filters.date_window().expect("valid date range");
//! println!("sessions shown from {} to {}", window.from, window.to);
//! ```

mod data;
mod error;
mod filters;
mod general;
mod status;

pub use data::DataConfig;
pub use error::ConfigError;
pub use filters::FiltersConfig;
pub use general::GeneralConfig;
pub use status::StatusConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub filters: FiltersConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AdminConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (if any) before building the figment.
    /// This is the typical entry point for the CLI.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".adminjo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ADMINJO_").split("__"))
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.filters.date_window()?;
        self.status.ongoing_window()?;
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("adminjo").join("config.toml"))
    }
}
