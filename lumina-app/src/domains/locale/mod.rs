//! Locale gate: keeps the active translation language equal to the URL's
//! locale segment before any child route content mounts.

pub mod messages;
pub mod update;

use lumina_model::Locale;

/// Resolution state for the current navigation.
///
/// While not `Ready`, the gate renders a blocking placeholder and mounts no
/// children; this prevents flashing mistranslated content and double
/// data-fetches under the wrong locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleResolution {
    /// Path segment does not match the active language
    Unresolved,
    /// A language change has been requested and not yet reported active
    Loading { requested: Locale },
    /// Active language equals the path segment
    Ready(Locale),
}

/// State of the locale gate wrapping every `/{locale}/...` route
#[derive(Debug)]
pub struct LocaleGate {
    pub resolution: LocaleResolution,
    /// Language the translation system currently reports active
    pub active_language: Option<Locale>,
    pub default_locale: Locale,
}

impl LocaleGate {
    pub fn new(default_locale: Locale) -> Self {
        Self {
            resolution: LocaleResolution::Unresolved,
            active_language: None,
            default_locale,
        }
    }

    /// Whether child route content may mount
    pub fn is_ready(&self) -> bool {
        matches!(self.resolution, LocaleResolution::Ready(_))
    }

    /// The resolved locale, once ready
    pub fn locale(&self) -> Option<Locale> {
        match self.resolution {
            LocaleResolution::Ready(locale) => Some(locale),
            _ => None,
        }
    }
}
