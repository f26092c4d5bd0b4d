//! Composition root wiring configuration into the gates and engines.

use std::sync::Arc;

use crate::domains::access::AccessGate;
use crate::domains::listing::{
    ListingCard, ListingController, ListingState, present,
};
use crate::domains::locale::LocaleGate;
use crate::effects::Effect;
use crate::routing;
use lumina_config::AppConfig;
use lumina_core::{DesignRepository, SessionStore};
use lumina_model::Locale;

/// Application shell: owns the configuration and the process-wide session
/// store, and hands out per-mount gate and engine instances.
#[derive(Debug)]
pub struct Shell {
    config: AppConfig,
    sessions: SessionStore,
}

impl Shell {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            sessions: SessionStore::new(),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The process-wide session store; identity adapters write into it
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Gate for a new navigation
    pub fn locale_gate(&self) -> LocaleGate {
        LocaleGate::new(self.config.default_locale)
    }

    /// Gate for a private subtree mounting under the resolved locale
    pub fn access_gate(&self, locale: Locale) -> AccessGate {
        AccessGate::mount(&self.sessions, locale)
    }

    /// Redirect for the bare root path
    pub fn root_redirect(&self, detected_language: Option<&str>) -> Effect {
        routing::root_redirect(detected_language, self.config.default_locale)
    }

    /// Engine instance for a newly mounted listing view
    pub fn listing(
        &self,
        repo: Arc<dyn DesignRepository>,
    ) -> ListingController {
        ListingController::new(repo, self.config.listing.page_size)
    }

    /// Project a listing's items into cards under the configured bucket
    pub fn listing_cards(
        &self,
        state: &ListingState,
        locale: Locale,
    ) -> Vec<ListingCard> {
        present(state, locale, &self.config.storage.base_url)
    }
}
