//! Default date range of the sessions screen.

use adminjo_core::selection::DateWindow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_date_from() -> NaiveDate {
    DateWindow::default().from
}

fn default_date_to() -> NaiveDate {
    DateWindow::default().to
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FiltersConfig {
    /// First day shown when the date range has no start (inclusive).
    #[serde(default = "default_date_from")]
    pub default_date_from: NaiveDate,

    /// Last day shown when the date range has no end (inclusive).
    #[serde(default = "default_date_to")]
    pub default_date_to: NaiveDate,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            default_date_from: default_date_from(),
            default_date_to: default_date_to(),
        }
    }
}

impl FiltersConfig {
    /// The configured default window, rejecting an inverted range.
    pub fn date_window(&self) -> Result<DateWindow, ConfigError> {
        if self.default_date_from > self.default_date_to {
            return Err(ConfigError::InvalidValue {
                field: "filters.default_date_from".into(),
                reason: format!(
                    "{} is after filters.default_date_to ({})",
                    self.default_date_from, self.default_date_to
                ),
            });
        }
        Ok(DateWindow::new(self.default_date_from, self.default_date_to))
    }
}
