use chrono::{DateTime, Utc};

use crate::ids::{DesignId, RequestId, UserId};

/// Inbound contact request from a visitor about a specific design.
///
/// Owned by the design's owner; listed newest-first in the dashboard inbox.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContactRequest {
    pub id: RequestId,
    pub design_id: DesignId,
    /// Designer the request is addressed to
    pub owner: UserId,
    pub sender_name: String,
    pub sender_email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}
