use std::fmt;

use crate::category::DesignCategory;
use crate::error::ModelError;

/// Fields available for ordering public listings, always descending.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum SortField {
    #[default]
    CreatedAt,
    Views,
    FavoritesCount,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        use SortField::*;
        &[CreatedAt, Views, FavoritesCount]
    }

    /// Wire name used both as the document field and the `sort` query value
    pub fn query_name(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::Views => "views",
            SortField::FavoritesCount => "favoritesCount",
        }
    }

    pub fn parse(raw: &str) -> Result<SortField, ModelError> {
        SortField::all()
            .iter()
            .copied()
            .find(|field| field.query_name() == raw)
            .ok_or_else(|| ModelError::UnknownSortField(raw.to_string()))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_name())
    }
}

/// Category constraint of a listing view. `All` is the sentinel default and
/// adds no query constraint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(DesignCategory),
}

/// Active filter of one mounted listing view.
///
/// The URL query string is the canonical persisted form: state is derived
/// from it on mount, and every mutation serializes back to it. Parameters at
/// their default value are omitted entirely, and an absent parameter decodes
/// as exactly the default.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct ListingFilter {
    pub category: CategoryFilter,
    pub sort_field: SortField,
}

const CATEGORY_PARAM: &str = "category";
const SORT_PARAM: &str = "sort";

impl ListingFilter {
    /// Serialize to URL query pairs, omitting defaults.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let CategoryFilter::Only(category) = self.category {
            pairs.push((
                CATEGORY_PARAM.to_string(),
                category.api_name().to_string(),
            ));
        }
        if self.sort_field != SortField::default() {
            pairs.push((
                SORT_PARAM.to_string(),
                self.sort_field.query_name().to_string(),
            ));
        }
        pairs
    }

    /// Decode from URL query pairs. Absent keys mean the default; unknown
    /// values also fall back to the default since the URL is user-editable.
    pub fn from_query_pairs<'a, I>(pairs: I) -> ListingFilter
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filter = ListingFilter::default();
        for (key, value) in pairs {
            match key {
                CATEGORY_PARAM => {
                    if let Ok(category) = DesignCategory::parse(value) {
                        filter.category = CategoryFilter::Only(category);
                    }
                }
                SORT_PARAM => {
                    if let Ok(field) = SortField::parse(value) {
                        filter.sort_field = field;
                    }
                }
                _ => {}
            }
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_serialize_to_no_pairs() {
        assert!(ListingFilter::default().to_query_pairs().is_empty());
    }

    #[test]
    fn non_default_filter_round_trips() {
        let filter = ListingFilter {
            category: CategoryFilter::Only(DesignCategory::Pendant),
            sort_field: SortField::Views,
        };
        let pairs = filter.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("category".to_string(), "Pendant".to_string()),
                ("sort".to_string(), "views".to_string()),
            ]
        );
        let decoded = ListingFilter::from_query_pairs(
            pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        );
        assert_eq!(decoded, filter);
    }

    #[test]
    fn absent_parameters_decode_as_defaults() {
        let decoded = ListingFilter::from_query_pairs(std::iter::empty());
        assert_eq!(decoded, ListingFilter::default());
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        let decoded = ListingFilter::from_query_pairs([
            ("category", "Spaceship"),
            ("sort", "price"),
        ]);
        assert_eq!(decoded, ListingFilter::default());
    }
}
