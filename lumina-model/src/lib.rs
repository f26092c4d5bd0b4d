//! Core data model definitions shared across Lumina crates.
#![allow(missing_docs)]

pub mod category;
pub mod contact;
pub mod design;
pub mod error;
pub mod filter;
pub mod ids;
pub mod image;
pub mod locale;
pub mod profile;
pub mod session;

// Intentionally curated re-exports for downstream consumers.
pub use category::DesignCategory;
pub use contact::ContactRequest;
pub use design::{Design, Visibility};
pub use error::{ModelError, Result as ModelResult};
pub use filter::{CategoryFilter, ListingFilter, SortField};
pub use ids::{DesignId, RequestId, UserId};
pub use image::{ImageFolder, ImageVariant, derivative_url};
pub use locale::Locale;
pub use profile::{DesignerProfile, Plan};
pub use session::Session;
