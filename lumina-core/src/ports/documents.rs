use async_trait::async_trait;

use crate::error::Result;
use crate::query::{DesignQuery, Page};
use lumina_model::{ContactRequest, Design, DesignId, RequestId, UserId};

/// Repository port for the designs collection.
#[async_trait]
pub trait DesignRepository: Send + Sync {
    /// Fetch one page of designs matching the query, in query order.
    ///
    /// A failed fetch must leave the caller free to retry; this call has no
    /// side effects.
    async fn query_page(&self, query: &DesignQuery) -> Result<Page<Design>>;

    /// Fetch a design by id.
    async fn get_design(&self, id: DesignId) -> Result<Option<Design>>;
}

/// Repository port for the dashboard inbox.
#[async_trait]
pub trait ContactRequestRepository: Send + Sync {
    /// Store a new inbound request.
    async fn create_request(&self, request: ContactRequest) -> Result<RequestId>;

    /// All requests addressed to a designer, newest first.
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<ContactRequest>>;

    /// Mark a request as read.
    async fn mark_read(&self, id: RequestId) -> Result<()>;
}
