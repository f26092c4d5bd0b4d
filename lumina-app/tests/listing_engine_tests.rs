//! Listing engine state machine tests
//!
//! Exercises the update handlers directly with hand-fed `PageLoaded`
//! messages so in-flight interleavings (duplicate load-more, filter change
//! racing a continuation) can be reproduced deterministically.

use chrono::{TimeZone, Utc};
use lumina_app::Effect;
use lumina_app::domains::listing::messages::Message;
use lumina_app::domains::listing::update::update_listing;
use lumina_app::domains::listing::{FetchPhase, ListingState};
use lumina_core::{Constraint, Cursor, Page};
use lumina_model::{
    CategoryFilter, Design, DesignCategory, DesignId, ListingFilter,
    SortField, UserId, Visibility,
};
use uuid::Uuid;

const PAGE_SIZE: usize = 8;

fn design(n: u64) -> Design {
    Design {
        id: DesignId(Uuid::from_u128(n as u128)),
        owner: UserId(Uuid::nil()),
        title: format!("design {n}"),
        category: DesignCategory::Pendant,
        visibility: Visibility::Public,
        image_file: format!("design-{n}.png"),
        created_at: Utc.timestamp_opt(1_700_000_000 + n as i64, 0).unwrap(),
        views: n,
        favorites_count: 0,
    }
}

fn page(range: std::ops::Range<u64>) -> Page<Design> {
    let items: Vec<Design> = range.map(design).collect();
    let next_cursor =
        items.last().map(|d| Cursor::new(d.id.to_string()));
    Page { items, next_cursor }
}

/// Pull the single fetch effect out of an update result
fn fetch_of(effects: &[Effect]) -> (u64, lumina_core::DesignQuery) {
    let fetches: Vec<_> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::FetchPage { generation, query } => {
                Some((*generation, query.clone()))
            }
            _ => None,
        })
        .collect();
    assert_eq!(fetches.len(), 1, "expected exactly one fetch: {effects:?}");
    fetches.into_iter().next().unwrap()
}

fn mounted_state() -> ListingState {
    let mut state = ListingState::new(PAGE_SIZE);
    let effects = update_listing(
        &mut state,
        Message::Mount {
            query_pairs: Vec::new(),
        },
    );
    let (generation, _) = fetch_of(&effects);
    update_listing(
        &mut state,
        Message::PageLoaded {
            generation,
            result: Ok(page(0..PAGE_SIZE as u64)),
        },
    );
    state
}

#[test]
fn mount_derives_filter_from_query_pairs() {
    let mut state = ListingState::new(PAGE_SIZE);
    let effects = update_listing(
        &mut state,
        Message::Mount {
            query_pairs: vec![
                ("category".to_string(), "Pendant".to_string()),
                ("sort".to_string(), "views".to_string()),
            ],
        },
    );
    assert_eq!(
        state.filter,
        ListingFilter {
            category: CategoryFilter::Only(DesignCategory::Pendant),
            sort_field: SortField::Views,
        }
    );
    let (_, query) = fetch_of(&effects);
    assert!(query
        .constraints
        .contains(&Constraint::Category(DesignCategory::Pendant)));
    assert_eq!(query.order_by, SortField::Views);
    // Mount mirrors the URL, it never rewrites it
    assert!(!effects
        .iter()
        .any(|e| matches!(e, Effect::ReplaceQueryParams(_))));
}

#[test]
fn apply_filter_rewrites_url_and_resets() {
    let mut state = mounted_state();
    assert_eq!(state.items.len(), PAGE_SIZE);

    let filter = ListingFilter {
        category: CategoryFilter::Only(DesignCategory::Outdoor),
        sort_field: SortField::FavoritesCount,
    };
    let effects = update_listing(&mut state, Message::ApplyFilter(filter));

    assert!(state.items.is_empty(), "reset must clear the sequence");
    assert!(state.cursor.is_none());
    assert!(!state.exhausted);
    assert_eq!(
        effects[0],
        Effect::ReplaceQueryParams(vec![
            ("category".to_string(), "Outdoor".to_string()),
            ("sort".to_string(), "favoritesCount".to_string()),
        ])
    );
    let (_, query) = fetch_of(&effects);
    assert!(query.start_after.is_none(), "first page, not a continuation");
}

#[test]
fn reapplying_the_identical_filter_is_a_no_op() {
    let mut state = mounted_state();
    let items_before = state.items.clone();
    let active = state.filter;

    let effects = update_listing(&mut state, Message::ApplyFilter(active));
    assert!(effects.is_empty(), "one reset and one fetch per distinct filter");
    assert_eq!(state.items, items_before);
}

#[test]
fn duplicate_load_more_in_flight_appends_exactly_one_page() {
    let mut state = mounted_state();

    let first = update_listing(&mut state, Message::LoadMore);
    let (generation, _) = fetch_of(&first);
    // Second call before the first resolves: dropped, not queued
    let second = update_listing(&mut state, Message::LoadMore);
    assert!(second.is_empty());

    update_listing(
        &mut state,
        Message::PageLoaded {
            generation,
            result: Ok(page(8..16)),
        },
    );
    assert_eq!(state.items.len(), 2 * PAGE_SIZE);
}

#[test]
fn late_page_from_old_filter_never_reaches_new_sequence() {
    let mut state = mounted_state();

    let effects = update_listing(&mut state, Message::LoadMore);
    let (old_generation, _) = fetch_of(&effects);

    // Filter changes while the continuation is in flight
    let filter = ListingFilter {
        category: CategoryFilter::Only(DesignCategory::Chandelier),
        sort_field: SortField::CreatedAt,
    };
    let effects = update_listing(&mut state, Message::ApplyFilter(filter));
    let (new_generation, _) = fetch_of(&effects);
    assert_ne!(old_generation, new_generation);

    // The stale continuation resolves after the reset: silently discarded
    let effects = update_listing(
        &mut state,
        Message::PageLoaded {
            generation: old_generation,
            result: Ok(page(8..16)),
        },
    );
    assert!(effects.is_empty());
    assert!(state.items.is_empty());
    assert_eq!(state.phase, FetchPhase::Loading { first_page: true });

    // The new filter's own page still lands
    update_listing(
        &mut state,
        Message::PageLoaded {
            generation: new_generation,
            result: Ok(page(20..23)),
        },
    );
    assert_eq!(state.items.len(), 3);
    assert!(state.exhausted);
}

#[test]
fn short_page_marks_exhausted_and_load_more_becomes_no_op() {
    let mut state = mounted_state();
    assert!(!state.exhausted);

    let effects = update_listing(&mut state, Message::LoadMore);
    let (generation, query) = fetch_of(&effects);
    assert!(query.start_after.is_some());

    update_listing(
        &mut state,
        Message::PageLoaded {
            generation,
            result: Ok(page(8..11)),
        },
    );
    assert_eq!(state.items.len(), 11);
    assert!(state.exhausted);

    let effects = update_listing(&mut state, Message::LoadMore);
    assert!(effects.is_empty());
    assert_eq!(state.items.len(), 11);
}

#[test]
fn exact_multiple_costs_one_extra_empty_fetch() {
    // A full final page false-negatives the exhausted check; the follow-up
    // load-more comes back empty and only then flips the flag.
    let mut state = mounted_state();

    let effects = update_listing(&mut state, Message::LoadMore);
    let (generation, _) = fetch_of(&effects);
    update_listing(
        &mut state,
        Message::PageLoaded {
            generation,
            result: Ok(page(8..16)),
        },
    );
    assert!(!state.exhausted, "full page cannot prove exhaustion");

    let effects = update_listing(&mut state, Message::LoadMore);
    let (generation, _) = fetch_of(&effects);
    update_listing(
        &mut state,
        Message::PageLoaded {
            generation,
            result: Ok(Page::empty()),
        },
    );
    assert!(state.exhausted);
    assert_eq!(state.items.len(), 16);
}

#[test]
fn first_page_failure_surfaces_error_and_allows_retry() {
    let mut state = ListingState::new(PAGE_SIZE);
    let effects = update_listing(
        &mut state,
        Message::Mount {
            query_pairs: Vec::new(),
        },
    );
    let (generation, _) = fetch_of(&effects);
    update_listing(
        &mut state,
        Message::PageLoaded {
            generation,
            result: Err("backend unavailable".to_string()),
        },
    );
    assert!(state.items.is_empty());
    assert_eq!(state.load_error.as_deref(), Some("backend unavailable"));
    assert_eq!(state.phase, FetchPhase::Idle);

    // Re-applying the same filter is the retry path after a failure
    let active = state.filter;
    let effects = update_listing(&mut state, Message::ApplyFilter(active));
    let (generation, _) = fetch_of(&effects);
    update_listing(
        &mut state,
        Message::PageLoaded {
            generation,
            result: Ok(page(0..3)),
        },
    );
    assert_eq!(state.items.len(), 3);
    assert!(state.load_error.is_none());
}

#[test]
fn continuation_failure_keeps_sequence_and_cursor_intact() {
    let mut state = mounted_state();
    let cursor_before = state.cursor.clone();

    let effects = update_listing(&mut state, Message::LoadMore);
    let (generation, _) = fetch_of(&effects);
    update_listing(
        &mut state,
        Message::PageLoaded {
            generation,
            result: Err("timeout".to_string()),
        },
    );

    assert_eq!(state.items.len(), PAGE_SIZE, "sequence must not corrupt");
    assert_eq!(state.cursor, cursor_before);
    assert!(!state.exhausted, "retry must remain possible");
    assert!(state.load_error.is_none(), "continuation failures only log");

    // And the retry actually goes out
    let effects = update_listing(&mut state, Message::LoadMore);
    fetch_of(&effects);
}

#[test]
fn load_more_before_any_completed_fetch_is_ignored() {
    let mut state = ListingState::new(PAGE_SIZE);
    assert!(update_listing(&mut state, Message::LoadMore).is_empty());

    // Also while the very first page is still in flight
    update_listing(
        &mut state,
        Message::Mount {
            query_pairs: Vec::new(),
        },
    );
    assert!(update_listing(&mut state, Message::LoadMore).is_empty());
}
