//! Session-expiry notifications.
//!
//! The authentication layer publishes a [`SessionExpired`] notice when the API
//! rejects the admin's credentials; screens subscribe and react (force logout,
//! show the expiry modal). The channel lives as long as the notifier that owns it.

use chrono::NaiveDateTime;
use tokio::sync::broadcast;

/// Subscribers lagging further behind than this lose the oldest notices.
const DEFAULT_CAPACITY: usize = 16;

/// Notice that the admin session is no longer valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionExpired {
    pub at: NaiveDateTime,
    pub reason: String,
}

/// Publisher side of the session-expiry channel.
#[derive(Debug, Clone)]
pub struct SessionExpiryNotifier {
    sender: broadcast::Sender<SessionExpired>,
}

impl Default for SessionExpiryNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl SessionExpiryNotifier {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionExpired> {
        self.sender.subscribe()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publish a notice. Returns how many subscribers received it.
    pub fn notify(&self, notice: SessionExpired) -> usize {
        match self.sender.send(notice) {
            Ok(delivered) => {
                tracing::info!(delivered, "session expiry published");
                delivered
            }
            Err(_) => {
                tracing::debug!("session expired with no subscriber listening");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::status::parse_schedule;

    fn notice() -> SessionExpired {
        SessionExpired {
            at: parse_schedule("2024-07-28", "20:30").unwrap(),
            reason: "refresh token rejected".into(),
        }
    }

    #[tokio::test]
    async fn every_subscriber_receives_the_notice() {
        let notifier = SessionExpiryNotifier::default();
        let mut header = notifier.subscribe();
        let mut guard = notifier.subscribe();

        assert_eq!(notifier.notify(notice()), 2);
        assert_eq!(header.recv().await.unwrap(), notice());
        assert_eq!(guard.recv().await.unwrap(), notice());
    }

    #[test]
    fn notifying_without_subscribers_is_harmless() {
        let notifier = SessionExpiryNotifier::new(0);
        assert_eq!(notifier.subscriber_count(), 0);
        assert_eq!(notifier.notify(notice()), 0);
    }

    #[test]
    fn dropped_subscribers_stop_counting() {
        let notifier = SessionExpiryNotifier::default();
        let receiver = notifier.subscribe();
        assert_eq!(notifier.subscriber_count(), 1);
        drop(receiver);
        assert_eq!(notifier.notify(notice()), 0);
    }
}
