//! Listing query engine.
//!
//! Produces the paginated, filtered, sorted sequence of public designs
//! behind the explore grid. One engine instance backs one mounted listing
//! view; filter changes fully replace the result set, `load more` appends
//! without refetching, and a generation counter keeps late pages fetched
//! under an old filter out of the new sequence.

pub mod cards;
pub mod controller;
pub mod messages;
pub mod update;

pub use cards::{ListingCard, present};
pub use controller::ListingController;

use lumina_core::Cursor;
use lumina_model::{Design, ListingFilter};

/// Fetch activity of the engine; calls that would start a second in-flight
/// fetch are dropped, not queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading { first_page: bool },
}

/// State owned by one mounted listing view
#[derive(Debug)]
pub struct ListingState {
    pub filter: ListingFilter,
    /// Concatenated pages in query order; unique by id across the sequence
    pub items: Vec<Design>,
    /// Anchor of the last fetched item, opaque to this engine
    pub cursor: Option<Cursor>,
    /// Set once a page comes back shorter than `page_size`
    pub exhausted: bool,
    pub phase: FetchPhase,
    /// Bumped by every filter reset; stale `PageLoaded` results carry an
    /// older value and are discarded
    pub generation: u64,
    pub page_size: usize,
    /// First-page failure surfaced to the view; continuation failures only
    /// log and leave the sequence intact
    pub load_error: Option<String>,
    /// Whether any fetch has completed under the active filter
    pub loaded_once: bool,
}

impl ListingState {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: ListingFilter::default(),
            items: Vec::new(),
            cursor: None,
            exhausted: false,
            phase: FetchPhase::Idle,
            generation: 0,
            page_size,
            load_error: None,
            loaded_once: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading { .. })
    }
}
