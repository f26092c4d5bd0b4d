use tracing::{debug, warn};

use super::messages::Message;
use super::{FetchPhase, ListingState};
use crate::effects::Effect;
use lumina_core::{Page, listing_query};
use lumina_model::{Design, ListingFilter};

pub fn update_listing(
    state: &mut ListingState,
    message: Message,
) -> Vec<Effect> {
    match message {
        Message::Mount { query_pairs } => handle_mount(state, query_pairs),
        Message::ApplyFilter(filter) => handle_apply_filter(state, filter),
        Message::LoadMore => handle_load_more(state),
        Message::PageLoaded { generation, result } => {
            handle_page_loaded(state, generation, result)
        }
    }
}

fn handle_mount(
    state: &mut ListingState,
    query_pairs: Vec<(String, String)>,
) -> Vec<Effect> {
    // The URL is the canonical filter representation; mount derives from it
    // and performs a plain first-page fetch, no rewrite.
    state.filter = ListingFilter::from_query_pairs(
        query_pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    );
    vec![begin_first_page(state)]
}

fn handle_apply_filter(
    state: &mut ListingState,
    filter: ListingFilter,
) -> Vec<Effect> {
    let already_active = filter == state.filter
        && state.load_error.is_none()
        && (state.loaded_once
            || state.phase == (FetchPhase::Loading { first_page: true }));
    if already_active {
        // One reset and one fetch per distinct filter
        debug!(?filter, "filter already active, ignoring");
        return Vec::new();
    }

    state.filter = filter;
    vec![
        Effect::ReplaceQueryParams(state.filter.to_query_pairs()),
        begin_first_page(state),
    ]
}

/// Reset to an empty sequence and issue the first-page fetch under the
/// active filter. Bumping the generation cancels any in-flight result.
fn begin_first_page(state: &mut ListingState) -> Effect {
    state.generation += 1;
    state.items.clear();
    state.cursor = None;
    state.exhausted = false;
    state.load_error = None;
    state.loaded_once = false;
    state.phase = FetchPhase::Loading { first_page: true };
    Effect::FetchPage {
        generation: state.generation,
        query: listing_query(&state.filter, state.page_size, None),
    }
}

fn handle_load_more(state: &mut ListingState) -> Vec<Effect> {
    if state.is_loading() {
        // Duplicate rapid calls are dropped, not queued
        debug!("load more ignored, fetch already in flight");
        return Vec::new();
    }
    if !state.loaded_once || state.exhausted {
        debug!(
            loaded_once = state.loaded_once,
            exhausted = state.exhausted,
            "load more ignored"
        );
        return Vec::new();
    }
    let Some(cursor) = state.cursor.clone() else {
        // First page was empty; nothing to continue from
        return Vec::new();
    };

    state.phase = FetchPhase::Loading { first_page: false };
    vec![Effect::FetchPage {
        generation: state.generation,
        query: listing_query(&state.filter, state.page_size, Some(cursor)),
    }]
}

fn handle_page_loaded(
    state: &mut ListingState,
    generation: u64,
    result: Result<Page<Design>, String>,
) -> Vec<Effect> {
    if generation != state.generation {
        // Fetched under a filter that has since been replaced
        debug!(
            generation,
            current = state.generation,
            "discarding stale page"
        );
        return Vec::new();
    }
    let FetchPhase::Loading { first_page } = state.phase else {
        debug!("page result with no fetch in flight, dropping");
        return Vec::new();
    };
    state.phase = FetchPhase::Idle;

    match result {
        Ok(page) => {
            state.loaded_once = true;
            state.load_error = None;
            state.exhausted = page.items.len() < state.page_size;
            if let Some(cursor) = page.next_cursor {
                state.cursor = Some(cursor);
            }
            state.items.extend(page.items);
            Vec::new()
        }
        Err(error) => {
            // The sequence stays as it was before the fetch; retry remains
            // possible for continuations, and the first page surfaces the
            // failure to the view.
            warn!(%error, first_page, "listing fetch failed");
            if first_page {
                state.load_error = Some(error);
            }
            Vec::new()
        }
    }
}
