use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of venue categories. Tokens on the wire are the uppercase
/// variant names the listings service uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    Mehmonxona,
    Restoran,
    Kafe,
    Fastfood,
    Avtoxizmat,
    Polya,
    Evakuator,
    Oquvmarkaza,
    Dokon,
}

/// (category, display label) in filter/select order.
pub const CATEGORY_LABELS: &[(Category, &str)] = &[
    (Category::Mehmonxona, "Hotel"),
    (Category::Restoran, "Restaurant"),
    (Category::Kafe, "Café"),
    (Category::Fastfood, "Fast food"),
    (Category::Avtoxizmat, "Car service"),
    (Category::Polya, "Field"),
    (Category::Evakuator, "Tow service"),
    (Category::Oquvmarkaza, "Training center"),
    (Category::Dokon, "Shop"),
];

impl Category {
    pub fn all() -> impl Iterator<Item = Category> {
        CATEGORY_LABELS.iter().map(|(c, _)| *c)
    }

    /// Token used in URLs and JSON bodies.
    pub fn token(self) -> &'static str {
        match self {
            Category::Mehmonxona => "MEHMONXONA",
            Category::Restoran => "RESTORAN",
            Category::Kafe => "KAFE",
            Category::Fastfood => "FASTFOOD",
            Category::Avtoxizmat => "AVTOXIZMAT",
            Category::Polya => "POLYA",
            Category::Evakuator => "EVAKUATOR",
            Category::Oquvmarkaza => "OQUVMARKAZA",
            Category::Dokon => "DOKON",
        }
    }

    pub fn label(self) -> &'static str {
        CATEGORY_LABELS
            .iter()
            .find(|(c, _)| *c == self)
            .map(|(_, label)| *label)
            .unwrap_or_else(|| self.token())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the wire token in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Category::all()
            .find(|c| c.token() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
