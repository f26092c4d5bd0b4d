use chrono::{DateTime, Utc};

use crate::ids::UserId;

/// Subscription plan of a designer account
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Pro,
}

/// Public-facing designer profile backing `/{locale}/perfil/{user_id}`.
///
/// `profile_complete` is set by the complete-profile flow after first
/// sign-up; the access gate redirects incomplete accounts there.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DesignerProfile {
    pub id: UserId,
    pub display_name: String,
    pub bio: String,
    /// Original logo upload file name, if any
    pub logo_file: Option<String>,
    pub plan: Plan,
    pub profile_complete: bool,
    pub created_at: DateTime<Utc>,
}
