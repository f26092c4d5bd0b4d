use lumina_core::DesignQuery;
use lumina_model::Locale;

/// Side effects requested by update handlers.
///
/// Handlers never perform I/O themselves; they return effects for the shell
/// (navigation, language changes, URL rewrites) or for the listing
/// controller (page fetches) to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Client-side navigation. `replace` navigations must not leave a
    /// history entry the user can back into.
    Navigate { path: String, replace: bool },

    /// Ask the translation system to activate a language; completion is
    /// reported back as a `LanguageActivated` message.
    ChangeLanguage(Locale),

    /// Rewrite the current URL's query string in place (no navigation)
    ReplaceQueryParams(Vec<(String, String)>),

    /// Fetch one page from the documents collaborator; the result must be
    /// fed back as `PageLoaded` carrying the same generation.
    FetchPage { generation: u64, query: DesignQuery },
}

impl Effect {
    pub fn is_fetch(&self) -> bool {
        matches!(self, Effect::FetchPage { .. })
    }
}
