use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

/// Cup size.
///
/// A closed set: once a `Size` exists it is one of the three cups, so
/// size-dependent pricing never needs a fallback branch. Unknown sizes are
/// rejected where text enters the system (see [`FromStr`]), including serde
/// input such as config files and recipes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum Size {
    #[default]
    Tall,
    Grande,
    Venti,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Tall, Size::Grande, Size::Venti];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Tall => "TALL",
            Size::Grande => "GRANDE",
            Size::Venti => "VENTI",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::InvalidSize(s.to_string()))
    }
}

impl TryFrom<String> for Size {
    type Error = CatalogError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
