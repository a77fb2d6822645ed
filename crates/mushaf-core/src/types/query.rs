use std::fmt;

use serde::{Deserialize, Serialize};

use super::chapter::Chapter;

/// Transliteration style used when listing chapter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Plain ASCII transliteration: "Al-Fatihah".
    #[default]
    Simple,
    /// Transliteration with diacritics: "Al-Fātiĥah".
    Complex,
}

impl Notation {
    /// Picks the name in this notation from a chapter.
    #[must_use]
    pub fn name_of(self, chapter: &Chapter) -> &str {
        match self {
            Self::Simple => &chapter.name_simple,
            Self::Complex => &chapter.name_complex,
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Complex => write!(f, "complex"),
        }
    }
}

/// Ordering applied to list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Mushaf order, ascending chapter id.
    #[default]
    Canonical,
    /// Chronological order of revelation, ascending `revelation_order`.
    Revelation,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canonical => write!(f, "canonical"),
            Self::Revelation => write!(f, "revelation"),
        }
    }
}
