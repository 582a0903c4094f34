use adminjo_config::AdminConfig;
use adminjo_core::catalog::Catalog;
use adminjo_core::clock::{Clock, FixedClock, SystemClock};
use adminjo_core::entities::Session;
use adminjo_core::filter::FilterEngine;
use adminjo_core::selection::DateWindow;
use adminjo_core::status::StatusResolver;
use anyhow::Context;
use chrono::{NaiveDateTime, TimeDelta};

use crate::context::Snapshot;

/// Clock used by a command: the wall clock, or a fixed `--at` instant.
#[derive(Debug, Clone, Copy)]
pub enum CommandClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for CommandClock {
    fn now(&self) -> NaiveDateTime {
        match self {
            Self::System(clock) => clock.now(),
            Self::Fixed(clock) => clock.now(),
        }
    }
}

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: AdminConfig,
    pub catalog: Catalog,
    pub sessions: Vec<Session>,
    pub ongoing_window: TimeDelta,
    pub date_window: DateWindow,
}

impl AppContext {
    /// Validate the config and load the snapshot from `data.dir`.
    pub fn init(config: AdminConfig) -> anyhow::Result<Self> {
        let ongoing_window = config
            .status
            .ongoing_window()
            .context("invalid status config")?;
        let date_window = config
            .filters
            .date_window()
            .context("invalid filters config")?;
        let snapshot = Snapshot::load(&config.data.dir).with_context(|| {
            format!(
                "failed to load snapshot from {}",
                config.data.dir.display()
            )
        })?;

        Ok(Self {
            config,
            catalog: snapshot.catalog,
            sessions: snapshot.sessions,
            ongoing_window,
            date_window,
        })
    }

    /// Filter engine resolving statuses at `at`, or at the wall clock.
    #[must_use]
    pub fn engine(&self, at: Option<NaiveDateTime>) -> FilterEngine<CommandClock> {
        let clock = at.map_or(CommandClock::System(SystemClock), |instant| {
            CommandClock::Fixed(FixedClock(instant))
        });
        FilterEngine::new(StatusResolver::with_window(clock, self.ongoing_window))
            .with_default_window(self.date_window)
    }
}
