//! Process-wide session validity, published by the API client.
//!
//! The client flips the status to [`SessionStatus::Expired`] whenever the
//! backend answers 401. Anyone interested (usually the page layer) holds a
//! receiver from [`SessionSignal::subscribe`] and decides how to react. The
//! channel only keeps the latest value.

use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Active,
    Expired,
}

#[derive(Debug, Clone)]
pub struct SessionSignal {
    sender: watch::Sender<SessionStatus>,
}

impl SessionSignal {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(SessionStatus::Active);
        Self { sender }
    }

    pub fn status(&self) -> SessionStatus {
        *self.sender.borrow()
    }

    /// Record that the backend rejected the session. Subscribers are only
    /// woken on the transition from active.
    pub fn invalidate(&self) {
        self.publish(SessionStatus::Expired);
    }

    /// Record that the backend accepted the session again.
    pub fn restore(&self) {
        self.publish(SessionStatus::Active);
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.sender.subscribe()
    }

    fn publish(&self, status: SessionStatus) {
        let changed = self.sender.send_if_modified(|current| {
            if *current == status {
                return false;
            }
            *current = status;
            true
        });
        if changed {
            tracing::debug!(?status, "session status changed");
        }
    }
}

impl Default for SessionSignal {
    fn default() -> Self {
        Self::new()
    }
}
