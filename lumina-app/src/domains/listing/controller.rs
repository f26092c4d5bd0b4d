use std::collections::VecDeque;
use std::sync::Arc;

use super::messages::Message;
use super::update::update_listing;
use super::ListingState;
use crate::effects::Effect;
use lumina_core::DesignRepository;
use lumina_model::ListingFilter;

/// Async driver for one listing view.
///
/// Owns the engine state and the documents port; runs update handlers,
/// executes the `FetchPage` effects they request, and feeds results back as
/// `PageLoaded`. Everything else (URL rewrites, navigations) is returned to
/// the caller, which is the shell's job to execute.
pub struct ListingController {
    repo: Arc<dyn DesignRepository>,
    state: ListingState,
}

impl std::fmt::Debug for ListingController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingController")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ListingController {
    pub fn new(repo: Arc<dyn DesignRepository>, page_size: usize) -> Self {
        Self {
            repo,
            state: ListingState::new(page_size),
        }
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// First activation; behaves exactly like a first-page fetch under the
    /// filter encoded in the URL query pairs.
    pub async fn mount(
        &mut self,
        query_pairs: Vec<(String, String)>,
    ) -> Vec<Effect> {
        self.dispatch(Message::Mount { query_pairs }).await
    }

    pub async fn apply_filter(
        &mut self,
        filter: ListingFilter,
    ) -> Vec<Effect> {
        self.dispatch(Message::ApplyFilter(filter)).await
    }

    pub async fn load_more(&mut self) -> Vec<Effect> {
        self.dispatch(Message::LoadMore).await
    }

    /// Run one message to quiescence: fetch effects are executed against
    /// the port and their results dispatched back in, shell effects are
    /// collected for the caller.
    pub async fn dispatch(&mut self, message: Message) -> Vec<Effect> {
        let mut pending =
            VecDeque::from(update_listing(&mut self.state, message));
        let mut shell_effects = Vec::new();

        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::FetchPage { generation, query } => {
                    let result = self
                        .repo
                        .query_page(&query)
                        .await
                        .map_err(|err| err.to_string());
                    pending.extend(update_listing(
                        &mut self.state,
                        Message::PageLoaded { generation, result },
                    ));
                }
                other => shell_effects.push(other),
            }
        }
        shell_effects
    }
}
