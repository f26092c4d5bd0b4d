//! Listing query description.
//!
//! A [`DesignQuery`] is a value describing one page fetch against the
//! designs collection; adapters translate it to their backend. Cursors are
//! opaque to everything above the adapter that minted them.

use serde::{Deserialize, Serialize};

use lumina_model::{
    CategoryFilter, DesignCategory, ListingFilter, SortField, UserId,
};

/// Equality constraints supported by the designs collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    /// Only publicly visible designs
    VisibilityPublic,
    /// Equality on the category field
    Category(DesignCategory),
    /// Equality on the owning user
    Owner(UserId),
}

/// Opaque pagination anchor minted by an adapter.
///
/// Anchored on the last returned item of the previous page under the
/// identical ordering; never inspected or fabricated by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Cursor(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page fetch against the designs collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignQuery {
    pub constraints: Vec<Constraint>,
    /// Ordering field, always descending. Ties fall through to the
    /// backend's own document-identity tie-break; no secondary ordering is
    /// imposed here and none may be assumed.
    pub order_by: SortField,
    pub start_after: Option<Cursor>,
    pub limit: usize,
}

/// A fetched page plus the anchor for the next one.
///
/// `next_cursor` is the cursor of the last returned item, `None` when the
/// page came back empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<Cursor>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Page {
            items: Vec::new(),
            next_cursor: None,
        }
    }
}

/// Build the public-listing query for a filter.
///
/// Always constrained to public visibility; a category constraint is added
/// unless the filter carries the `All` sentinel; ordering is descending by
/// the filter's sort field; continuation pages anchor on the caller's
/// cursor.
pub fn listing_query(
    filter: &ListingFilter,
    page_size: usize,
    start_after: Option<Cursor>,
) -> DesignQuery {
    let mut constraints = vec![Constraint::VisibilityPublic];
    if let CategoryFilter::Only(category) = filter.category {
        constraints.push(Constraint::Category(category));
    }
    DesignQuery {
        constraints,
        order_by: filter.sort_field,
        start_after,
        limit: page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_adds_no_category_constraint() {
        let query = listing_query(&ListingFilter::default(), 8, None);
        assert_eq!(query.constraints, vec![Constraint::VisibilityPublic]);
        assert_eq!(query.order_by, SortField::CreatedAt);
        assert_eq!(query.limit, 8);
        assert!(query.start_after.is_none());
    }

    #[test]
    fn category_filter_adds_equality_constraint() {
        let filter = ListingFilter {
            category: CategoryFilter::Only(DesignCategory::Chandelier),
            sort_field: SortField::Views,
        };
        let query = listing_query(&filter, 8, Some(Cursor::new("anchor")));
        assert_eq!(
            query.constraints,
            vec![
                Constraint::VisibilityPublic,
                Constraint::Category(DesignCategory::Chandelier),
            ]
        );
        assert_eq!(query.order_by, SortField::Views);
        assert_eq!(query.start_after, Some(Cursor::new("anchor")));
    }
}
