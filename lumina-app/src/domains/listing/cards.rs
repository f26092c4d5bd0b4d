use url::Url;

use super::ListingState;
use crate::routing::Route;
use lumina_model::{
    Design, ImageFolder, ImageVariant, Locale, derivative_url,
};

/// One rendered grid entry: the design plus everything the card template
/// needs that is derived rather than stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCard {
    pub design: Design,
    /// Grid thumbnail derivative
    pub thumb_url: Url,
    /// Locale-prefixed link to the detail page
    pub detail_path: String,
}

/// Project the engine's item sequence into renderable cards, preserving
/// query order.
pub fn present(
    state: &ListingState,
    locale: Locale,
    storage_base: &Url,
) -> Vec<ListingCard> {
    state
        .items
        .iter()
        .map(|design| ListingCard {
            thumb_url: derivative_url(
                storage_base,
                ImageFolder::Designs,
                design.owner,
                &design.image_file,
                ImageVariant::Thumb,
            ),
            detail_path: Route::DesignDetail(design.id).path(locale),
            design: design.clone(),
        })
        .collect()
}
