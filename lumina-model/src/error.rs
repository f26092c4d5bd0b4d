use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    UnknownCategory(String),
    UnknownSortField(String),
    UnsupportedLocale(String),
    InvalidFileName(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownCategory(raw) => {
                write!(f, "unknown category: {raw}")
            }
            ModelError::UnknownSortField(raw) => {
                write!(f, "unknown sort field: {raw}")
            }
            ModelError::UnsupportedLocale(raw) => {
                write!(f, "unsupported locale: {raw}")
            }
            ModelError::InvalidFileName(raw) => {
                write!(f, "invalid file name: {raw}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
