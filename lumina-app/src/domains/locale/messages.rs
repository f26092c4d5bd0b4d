use lumina_model::Locale;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Navigation landed on a `/{segment}/...` path
    PathChanged { path: String },

    /// The translation system reports this language as now active
    LanguageActivated(Locale),
}
