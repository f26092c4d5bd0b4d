//! In-memory documents adapter.
//!
//! Reproduces the managed database's observable query behavior — equality
//! constraints, single-field descending order with a document-identity
//! tie-break, and cursor pages anchored after a previous item — over plain
//! vectors. Backs tests and demo seeding.

use std::cmp::Reverse;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, Result};
use crate::ports::{ContactRequestRepository, DesignRepository};
use crate::query::{Constraint, Cursor, DesignQuery, Page};
use lumina_model::{ContactRequest, Design, DesignId, RequestId, UserId};

/// Vector-backed stand-in for the document database
#[derive(Debug, Default)]
pub struct InMemoryDocuments {
    designs: RwLock<Vec<Design>>,
    requests: RwLock<Vec<ContactRequest>>,
}

impl InMemoryDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the designs collection
    pub async fn insert_design(&self, design: Design) {
        self.designs.write().await.push(design);
    }

    pub async fn insert_designs(
        &self,
        designs: impl IntoIterator<Item = Design>,
    ) {
        self.designs.write().await.extend(designs);
    }

    fn matches(design: &Design, constraints: &[Constraint]) -> bool {
        constraints.iter().all(|constraint| match constraint {
            Constraint::VisibilityPublic => design.visibility.is_public(),
            Constraint::Category(category) => design.category == *category,
            Constraint::Owner(owner) => design.owner == *owner,
        })
    }
}

#[async_trait]
impl DesignRepository for InMemoryDocuments {
    async fn query_page(&self, query: &DesignQuery) -> Result<Page<Design>> {
        let designs = self.designs.read().await;

        let mut matched: Vec<&Design> = designs
            .iter()
            .filter(|design| Self::matches(design, &query.constraints))
            .collect();
        // Descending on the sort field; ties fall through to descending
        // document id, the backend's own tie-break.
        matched.sort_by_key(|design| {
            Reverse((design.sort_key(query.order_by), design.id))
        });

        let start = match &query.start_after {
            Some(cursor) => {
                let anchor = matched
                    .iter()
                    .position(|design| design.id.to_string() == cursor.as_str())
                    .ok_or_else(|| {
                        CoreError::InvalidCursor(cursor.as_str().to_string())
                    })?;
                anchor + 1
            }
            None => 0,
        };

        let items: Vec<Design> = matched
            .into_iter()
            .skip(start)
            .take(query.limit)
            .cloned()
            .collect();
        let next_cursor = items
            .last()
            .map(|design| Cursor::new(design.id.to_string()));

        Ok(Page { items, next_cursor })
    }

    async fn get_design(&self, id: DesignId) -> Result<Option<Design>> {
        let designs = self.designs.read().await;
        Ok(designs.iter().find(|design| design.id == id).cloned())
    }
}

#[async_trait]
impl ContactRequestRepository for InMemoryDocuments {
    async fn create_request(
        &self,
        request: ContactRequest,
    ) -> Result<RequestId> {
        let id = request.id;
        self.requests.write().await.push(request);
        Ok(id)
    }

    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<ContactRequest>> {
        let requests = self.requests.read().await;
        let mut inbox: Vec<ContactRequest> = requests
            .iter()
            .filter(|request| request.owner == owner)
            .cloned()
            .collect();
        inbox.sort_by_key(|request| Reverse(request.created_at));
        Ok(inbox)
    }

    async fn mark_read(&self, id: RequestId) -> Result<()> {
        let mut requests = self.requests.write().await;
        let request = requests
            .iter_mut()
            .find(|request| request.id == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        request.read = true;
        Ok(())
    }
}
