//! Shared configuration for the Lumina front-end crates.
//!
//! Centralizes defaults, optional TOML loading, `LUMINA_*` environment
//! overrides, and validation so there is a single source of truth for the
//! configured fallback locale, the listing page size, and the object-store
//! base URL.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use lumina_model::Locale;

/// Configuration load or validation failure
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Listing view tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Items fetched per page; the engine marks a listing exhausted when a
    /// page comes back shorter than this.
    pub page_size: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self { page_size: 8 }
    }
}

/// Object-store locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Public base URL of the bucket serving originals and derivatives
    pub base_url: Url,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://storage.googleapis.com/lumina-app")
                .expect("default base url is valid"),
        }
    }
}

/// Document-database collection names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionsConfig {
    pub designs: String,
    pub requests: String,
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self {
            designs: "designs".to_string(),
            requests: "contactRequests".to_string(),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallback locale when detection fails or yields an unsupported tag
    pub default_locale: Locale,
    pub listing: ListingConfig,
    pub storage: StorageConfig,
    pub collections: CollectionsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::DEFAULT,
            listing: ListingConfig::default(),
            storage: StorageConfig::default(),
            collections: CollectionsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from an optional TOML file, then apply environment overrides,
    /// then validate.
    pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                toml::from_str(&raw)?
            }
            None => AppConfig::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        tracing::debug!(
            default_locale = %config.default_locale,
            page_size = config.listing.page_size,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Apply `LUMINA_*` overrides from the given lookup. Split out from
    /// [`AppConfig::load`] so tests can inject variables without touching
    /// process state.
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(raw) = lookup("LUMINA_DEFAULT_LOCALE") {
            self.default_locale =
                Locale::from_path_segment(&raw).ok_or_else(|| {
                    ConfigError::InvalidValue {
                        key: "LUMINA_DEFAULT_LOCALE".to_string(),
                        reason: format!("unsupported locale {raw:?}"),
                    }
                })?;
        }
        if let Some(raw) = lookup("LUMINA_PAGE_SIZE") {
            self.listing.page_size =
                raw.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "LUMINA_PAGE_SIZE".to_string(),
                    reason: format!("not a positive integer: {raw:?}"),
                })?;
        }
        if let Some(raw) = lookup("LUMINA_STORAGE_BASE_URL") {
            self.storage.base_url =
                Url::parse(&raw).map_err(|err| ConfigError::InvalidValue {
                    key: "LUMINA_STORAGE_BASE_URL".to_string(),
                    reason: err.to_string(),
                })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listing.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "listing.page_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.collections.designs.is_empty()
            || self.collections.requests.is_empty()
        {
            return Err(ConfigError::InvalidValue {
                key: "collections".to_string(),
                reason: "collection names must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
