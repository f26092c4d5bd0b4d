use std::fmt;

use crate::error::ModelError;

/// Fixed category set for portfolio designs
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
pub enum DesignCategory {
    Pendant,
    Chandelier,
    WallSconce,
    FloorLamp,
    TableLamp,
    Outdoor,
}

impl DesignCategory {
    pub fn all() -> &'static [DesignCategory] {
        use DesignCategory::*;
        &[Pendant, Chandelier, WallSconce, FloorLamp, TableLamp, Outdoor]
    }

    /// Wire name stored in documents and URL query parameters. Translation
    /// keys map these to display labels; the wire form never localizes.
    pub fn api_name(&self) -> &'static str {
        match self {
            DesignCategory::Pendant => "Pendant",
            DesignCategory::Chandelier => "Chandelier",
            DesignCategory::WallSconce => "WallSconce",
            DesignCategory::FloorLamp => "FloorLamp",
            DesignCategory::TableLamp => "TableLamp",
            DesignCategory::Outdoor => "Outdoor",
        }
    }

    pub fn parse(raw: &str) -> Result<DesignCategory, ModelError> {
        DesignCategory::all()
            .iter()
            .copied()
            .find(|category| category.api_name() == raw)
            .ok_or_else(|| ModelError::UnknownCategory(raw.to_string()))
    }
}

impl fmt::Display for DesignCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}
