use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a chapter was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevelationPlace {
    /// Mecca.
    Makkah,
    /// Medina.
    Madinah,
}

impl fmt::Display for RevelationPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Makkah => write!(f, "makkah"),
            Self::Madinah => write!(f, "madinah"),
        }
    }
}

/// A chapter name rendered in the requested language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslatedName {
    /// The translated name (e.g. "The Opener").
    pub name: String,
    /// Language the name is written in.
    #[serde(default)]
    pub language_name: String,
}

/// One of the 114 chapters (surahs), as served by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chapter {
    /// Canonical chapter number, 1..=114.
    pub id: u32,

    /// Transliterated name without diacritics ("Al-Fatihah").
    pub name_simple: String,

    /// Transliterated name with diacritics ("Al-Fātiĥah").
    pub name_complex: String,

    /// Name in Arabic script ("الفاتحة").
    pub name_arabic: String,

    /// Name translated into the request language.
    pub translated_name: TranslatedName,

    /// Where the chapter was revealed.
    pub revelation_place: RevelationPlace,

    /// Position in the chronological order of revelation, 1..=114.
    pub revelation_order: u32,

    /// Number of verses.
    pub verses_count: u32,

    /// Whether the chapter is preceded by the basmala.
    #[serde(default)]
    pub bismillah_pre: bool,
}

impl Chapter {
    /// Returns `true` if `name` equals either the simple or the complex name.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name_simple == name || self.name_complex == name
    }

    /// Returns the simple/complex name pair of this chapter.
    #[must_use]
    pub fn names(&self) -> ChapterNames {
        ChapterNames {
            simple: self.name_simple.clone(),
            complex: self.name_complex.clone(),
        }
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03} {} ({}, {} verses)",
            self.id, self.name_simple, self.revelation_place, self.verses_count
        )
    }
}

/// Simple and complex transliterations of one chapter name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChapterNames {
    /// Name without diacritics.
    pub simple: String,
    /// Name with diacritics.
    pub complex: String,
}

impl From<ChapterNames> for (String, String) {
    fn from(names: ChapterNames) -> Self {
        (names.simple, names.complex)
    }
}
