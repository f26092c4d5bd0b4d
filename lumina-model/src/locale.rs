use std::fmt;

use crate::error::ModelError;

/// UI locale carried as the first path segment of every in-app URL.
///
/// The active translation language must always equal the path's locale;
/// resolution of a mismatch is the locale gate's job, not this type's.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Es,
    En,
    Zh,
}

impl Locale {
    /// Configured fallback when detection fails or yields an unsupported tag
    pub const DEFAULT: Locale = Locale::En;

    pub fn all() -> &'static [Locale] {
        use Locale::*;
        &[Es, En, Zh]
    }

    /// Two-letter path segment / subtag form
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Parse an exact two-letter path segment. `"es"` matches, `"es-ES"`
    /// does not: path segments are always bare codes.
    pub fn from_path_segment(segment: &str) -> Option<Locale> {
        Locale::all()
            .iter()
            .copied()
            .find(|locale| locale.as_str() == segment)
    }

    /// Match a BCP 47 language tag by its primary subtag, so a browser
    /// reporting `es-ES` resolves to `Es` while `pt-BR` resolves to nothing.
    pub fn from_language_tag(tag: &str) -> Option<Locale> {
        let primary = tag.split('-').next().unwrap_or(tag);
        Locale::from_path_segment(primary)
    }

    pub fn parse(segment: &str) -> Result<Locale, ModelError> {
        Locale::from_path_segment(segment)
            .ok_or_else(|| ModelError::UnsupportedLocale(segment.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segment_requires_exact_code() {
        assert_eq!(Locale::from_path_segment("es"), Some(Locale::Es));
        assert_eq!(Locale::from_path_segment("es-ES"), None);
        assert_eq!(Locale::from_path_segment("pt"), None);
        assert_eq!(Locale::from_path_segment(""), None);
    }

    #[test]
    fn language_tag_matches_primary_subtag() {
        assert_eq!(Locale::from_language_tag("es-ES"), Some(Locale::Es));
        assert_eq!(Locale::from_language_tag("zh-Hans-CN"), Some(Locale::Zh));
        assert_eq!(Locale::from_language_tag("pt-BR"), None);
        assert_eq!(Locale::from_language_tag("en"), Some(Locale::En));
    }
}
