//! Process-wide observable session state.
//!
//! The identity provider is the only writer; every consumer owns its own
//! `watch::Receiver` whose lifecycle is tied to the consumer's mount and
//! unmount. Dropping the receiver detaches the subscription.

use std::sync::Arc;

use tokio::sync::watch;

use lumina_model::{Session, UserId};

/// Thread-safe session store using a watch channel.
///
/// Subscribers observe the current value immediately and every subsequent
/// change, in emission order.
#[derive(Clone, Debug)]
pub struct SessionStore {
    sender: Arc<watch::Sender<Session>>,
    receiver: watch::Receiver<Session>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a store holding an anonymous session
    pub fn new() -> Self {
        let (sender, receiver) = watch::channel(Session::Anonymous);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    /// Get the current session
    pub fn current(&self) -> Session {
        *self.receiver.borrow()
    }

    /// Check authentication without cloning
    pub fn is_authenticated(&self) -> bool {
        self.receiver.borrow().is_authenticated()
    }

    /// Subscribe to session changes
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.receiver.clone()
    }

    /// Replace the session wholesale
    pub fn set(&self, session: Session) {
        // Ignore send errors (no receivers)
        let _ = self.sender.send(session);
    }

    /// Transition to an authenticated session
    pub fn sign_in(&self, user_id: UserId) {
        tracing::debug!(%user_id, "session authenticated");
        self.set(Session::Authenticated { user_id });
    }

    /// Transition to an anonymous session
    pub fn sign_out(&self) {
        tracing::debug!("session cleared");
        self.set(Session::Anonymous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_see_current_value_then_changes() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();
        assert_eq!(*rx.borrow_and_update(), Session::Anonymous);

        let user = UserId::new();
        store.sign_in(user);
        rx.changed().await.expect("sender alive");
        assert_eq!(
            *rx.borrow_and_update(),
            Session::Authenticated { user_id: user }
        );

        store.sign_out();
        rx.changed().await.expect("sender alive");
        assert!(!rx.borrow_and_update().is_authenticated());
    }

    #[tokio::test]
    async fn dropped_receiver_does_not_block_writers() {
        let store = SessionStore::new();
        let rx = store.subscribe();
        drop(rx);
        store.sign_in(UserId::new());
        assert!(store.is_authenticated());
    }
}
