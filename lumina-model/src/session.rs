use crate::ids::UserId;

/// Identity-provider session as observed by the client.
///
/// The provider pushes a new value whenever the session changes; consumers
/// must re-render from the most recent value and never cache a stale one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    /// No signed-in user
    #[default]
    Anonymous,

    /// A user is signed in
    Authenticated { user_id: UserId },
}

impl Session {
    /// Check whether the session carries a signed-in user
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// Get the signed-in user id, if any
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Session::Authenticated { user_id } => Some(*user_id),
            Session::Anonymous => None,
        }
    }
}
