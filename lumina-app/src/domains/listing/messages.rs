use lumina_core::Page;
use lumina_model::{Design, ListingFilter};

#[derive(Debug, Clone)]
pub enum Message {
    /// First activation; the filter is derived from the URL query pairs
    Mount { query_pairs: Vec<(String, String)> },

    /// Explicit user filter action
    ApplyFilter(ListingFilter),

    /// Fetch the next page after the current cursor
    LoadMore,

    /// A fetch resolved. `generation` is the value captured when the fetch
    /// was issued; a mismatch against the current generation means the
    /// filter changed mid-flight and the page is dropped.
    PageLoaded {
        generation: u64,
        result: Result<Page<Design>, String>,
    },
}
