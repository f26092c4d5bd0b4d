//! Access gate wrapping every private route subtree.
//!
//! The gate owns a live subscription to the [`SessionStore`] for the whole
//! lifetime of the mounted subtree: a session invalidated while a protected
//! page is open transitions `Granted → Denied` and redirects without a
//! reload. Dropping the gate drops the receiver, so no callback can fire
//! after unmount.

use tokio::sync::watch;
use tracing::{debug, info};

use crate::effects::Effect;
use crate::routing;
use lumina_core::SessionStore;
use lumina_model::{DesignerProfile, Locale, Session, UserId};

/// Authorization state of the protected subtree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Waiting for the first session notification; renders a placeholder,
    /// never the subtree and never a denial flash
    CheckingSession,
    /// Session present; the subtree renders
    Granted { user_id: UserId },
    /// No session; a replacing redirect to login has been issued
    Denied,
}

/// Gate instance owning one session subscription
#[derive(Debug)]
pub struct AccessGate {
    state: GateState,
    /// Locale the denial redirect is issued under
    locale: Locale,
    receiver: watch::Receiver<Session>,
    /// Highest notification sequence applied; older resolutions that
    /// arrive late are dropped
    last_seq: u64,
    next_seq: u64,
}

impl AccessGate {
    /// Mount the gate: subscribes immediately, state starts as
    /// `CheckingSession` until the first notification is applied.
    pub fn mount(store: &SessionStore, locale: Locale) -> Self {
        Self {
            state: GateState::CheckingSession,
            locale,
            receiver: store.subscribe(),
            last_seq: 0,
            next_seq: 0,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Whether the protected subtree renders
    pub fn renders_subtree(&self) -> bool {
        matches!(self.state, GateState::Granted { .. })
    }

    /// Apply the session value currently held by the store. The watch
    /// channel always holds the latest value, so this also serves as the
    /// immediate first notification on mount.
    pub fn observe(&mut self) -> Vec<Effect> {
        let session = *self.receiver.borrow_and_update();
        let seq = self.next_seq;
        self.next_seq += 1;
        self.on_session(seq, session)
    }

    /// Wait for the next session change and apply it. Returns `None` when
    /// the store has gone away.
    pub async fn changed(&mut self) -> Option<Vec<Effect>> {
        self.receiver.changed().await.ok()?;
        Some(self.observe())
    }

    /// Apply one session notification.
    ///
    /// `seq` must be monotone per emission; notifications older than one
    /// already applied are discarded so an out-of-order resolution can
    /// never roll the visible state backwards.
    pub fn on_session(&mut self, seq: u64, session: Session) -> Vec<Effect> {
        if seq < self.last_seq {
            debug!(seq, last = self.last_seq, "stale session notification");
            return Vec::new();
        }
        self.last_seq = seq;

        match session {
            Session::Authenticated { user_id } => {
                self.state = GateState::Granted { user_id };
                Vec::new()
            }
            Session::Anonymous => {
                let was_denied = self.state == GateState::Denied;
                self.state = GateState::Denied;
                if was_denied {
                    // Redirect already issued for this denial
                    return Vec::new();
                }
                info!(locale = %self.locale, "access denied, redirecting to login");
                vec![Effect::Navigate {
                    path: routing::login_path(self.locale),
                    replace: true,
                }]
            }
        }
    }

    /// First-time users land in the dashboard before filling in their
    /// profile; send them to the complete-profile flow once profile data is
    /// known. No profile document at all means the check cannot run yet.
    pub fn on_profile(&self, profile: &DesignerProfile) -> Vec<Effect> {
        match self.state {
            GateState::Granted { user_id }
                if profile.id == user_id && !profile.profile_complete =>
            {
                vec![Effect::Navigate {
                    path: routing::complete_profile_path(self.locale),
                    replace: true,
                }]
            }
            _ => Vec::new(),
        }
    }
}
