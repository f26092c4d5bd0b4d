use chrono::{DateTime, Utc};

use crate::category::DesignCategory;
use crate::filter::SortField;
use crate::ids::{DesignId, UserId};

/// Listing visibility flag. Public listing views only ever fetch `Public`
/// designs; `Private` ones are reachable solely through the owner dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// A portfolio piece owned by a designer.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Design {
    pub id: DesignId,
    pub owner: UserId,
    pub title: String,
    pub category: DesignCategory,
    pub visibility: Visibility,
    /// Original upload file name; derivative URLs are computed from it
    pub image_file: String,
    pub created_at: DateTime<Utc>,
    pub views: u64,
    pub favorites_count: u64,
}

/// Orderable value of a single sortable field, comparable across documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Timestamp(i64),
    Count(u64),
}

impl Design {
    /// Value of the given sort field for ordering. Ties are broken by the
    /// backing store's document identity, not by this type.
    pub fn sort_key(&self, field: SortField) -> SortKey {
        match field {
            SortField::CreatedAt => {
                SortKey::Timestamp(self.created_at.timestamp_micros())
            }
            SortField::Views => SortKey::Count(self.views),
            SortField::FavoritesCount => SortKey::Count(self.favorites_count),
        }
    }
}
