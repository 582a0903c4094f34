//! Session status resolution settings.

use adminjo_core::status::DEFAULT_ONGOING_WINDOW_MINUTES;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_window() -> i64 {
    DEFAULT_ONGOING_WINDOW_MINUTES
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatusConfig {
    /// Minutes a session stays "ongoing" after its scheduled start.
    #[serde(default = "default_window")]
    pub ongoing_window_minutes: i64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            ongoing_window_minutes: default_window(),
        }
    }
}

impl StatusConfig {
    pub fn ongoing_window(&self) -> Result<TimeDelta, ConfigError> {
        if self.ongoing_window_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "status.ongoing_window_minutes".into(),
                reason: format!("must be positive, got {}", self.ongoing_window_minutes),
            });
        }
        TimeDelta::try_minutes(self.ongoing_window_minutes).ok_or_else(|| {
            ConfigError::InvalidValue {
                field: "status.ongoing_window_minutes".into(),
                reason: "out of range".into(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_two_hours() {
        assert_eq!(
            StatusConfig::default().ongoing_window().unwrap(),
            TimeDelta::hours(2)
        );
    }

    #[test]
    fn non_positive_window_is_rejected() {
        let config = StatusConfig {
            ongoing_window_minutes: 0,
        };
        assert!(config.ongoing_window().is_err());
    }
}
