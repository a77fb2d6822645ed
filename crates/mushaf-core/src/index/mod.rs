//! # Chapter Index
//!
//! In-memory queries over the full chapter list. Every list and lookup
//! operation of the chapter catalog is evaluated here; the client crate only
//! adds the fetch.

pub mod suggest;

use tracing::debug;

use crate::error::{MushafError, Result};
use crate::types::{
    CHAPTER_COUNT, Chapter, ChapterNames, ChapterNumber, Notation, Order, RevelationPlace,
};

/// Validated, immutable list of all 114 chapters in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterIndex {
    chapters: Vec<Chapter>,
}

impl ChapterIndex {
    /// Builds an index from a decoded chapter list.
    ///
    /// The list is sorted by id. Input order does not matter.
    ///
    /// # Errors
    ///
    /// Returns `MushafError::InvalidPayload` unless there are exactly 114
    /// chapters whose ids and revelation orders each form a permutation of
    /// 1..=114.
    pub fn new(mut chapters: Vec<Chapter>) -> Result<Self> {
        if chapters.len() != CHAPTER_COUNT as usize {
            return Err(MushafError::InvalidPayload(format!(
                "expected {CHAPTER_COUNT} chapters, got {}",
                chapters.len()
            )));
        }

        check_permutation("id", chapters.iter().map(|c| c.id))?;
        check_permutation(
            "revelation_order",
            chapters.iter().map(|c| c.revelation_order),
        )?;

        chapters.sort_by_key(|c| c.id);
        debug!(count = chapters.len(), "built chapter index");
        Ok(Self { chapters })
    }

    /// All chapters in canonical order.
    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Number of chapters (always 114).
    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    /// Always `false`; an index cannot be built from an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    fn ordered(&self, order: Order) -> Vec<&Chapter> {
        let mut chapters: Vec<&Chapter> = self.chapters.iter().collect();
        if order == Order::Revelation {
            chapters.sort_by_key(|c| c.revelation_order);
        }
        chapters
    }

    /// Lists every chapter name in the given notation and order.
    #[must_use]
    pub fn list_names(&self, notation: Notation, order: Order) -> Vec<String> {
        self.ordered(order)
            .into_iter()
            .map(|c| notation.name_of(c).to_string())
            .collect()
    }

    /// Lists every chapter name in Arabic script, canonical order.
    #[must_use]
    pub fn list_arabic_names(&self) -> Vec<String> {
        self.chapters.iter().map(|c| c.name_arabic.clone()).collect()
    }

    /// Lists every translated chapter name, canonical order.
    #[must_use]
    pub fn list_translated_names(&self) -> Vec<String> {
        self.chapters
            .iter()
            .map(|c| c.translated_name.name.clone())
            .collect()
    }

    /// Lists the names of chapters revealed at `place`, canonical order.
    #[must_use]
    pub fn list_by_place(&self, place: RevelationPlace, notation: Notation) -> Vec<String> {
        self.chapters
            .iter()
            .filter(|c| c.revelation_place == place)
            .map(|c| notation.name_of(c).to_string())
            .collect()
    }

    /// Finds a chapter by its exact simple or complex name.
    ///
    /// # Errors
    ///
    /// Returns `MushafError::NotFound` (with a suggestion when a known name
    /// is close) if no chapter carries that name.
    pub fn find_by_name(&self, name: &str) -> Result<&Chapter> {
        self.chapters
            .iter()
            .find(|c| c.matches_name(name))
            .ok_or_else(|| MushafError::NotFound {
                what: "name",
                query: name.to_string(),
                suggestion: suggest::closest(
                    name,
                    self.chapters
                        .iter()
                        .flat_map(|c| [c.name_simple.as_str(), c.name_complex.as_str()]),
                ),
            })
    }

    /// Finds a chapter by its exact translated name.
    ///
    /// # Errors
    ///
    /// Returns `MushafError::NotFound` if no chapter carries that translated name.
    pub fn find_by_translated_name(&self, translated_name: &str) -> Result<&Chapter> {
        self.chapters
            .iter()
            .find(|c| c.translated_name.name == translated_name)
            .ok_or_else(|| MushafError::NotFound {
                what: "translated name",
                query: translated_name.to_string(),
                suggestion: suggest::closest(
                    translated_name,
                    self.chapters.iter().map(|c| c.translated_name.name.as_str()),
                ),
            })
    }

    /// Finds a chapter by its canonical number.
    ///
    /// # Errors
    ///
    /// Returns `MushafError::InvalidArgument` if `number` is outside 1..=114.
    pub fn find_by_number(&self, number: i64) -> Result<&Chapter> {
        let number = ChapterNumber::new("number", number)?;
        self.chapters
            .iter()
            .find(|c| c.id == number.get())
            .ok_or_else(|| MushafError::NotFound {
                what: "number",
                query: number.to_string(),
                suggestion: None,
            })
    }

    /// Finds the chapter revealed at position `order`.
    ///
    /// # Errors
    ///
    /// Returns `MushafError::InvalidArgument` if `order` is outside 1..=114.
    pub fn find_by_revelation_order(&self, order: i64) -> Result<&Chapter> {
        let order = ChapterNumber::new("revelation_order", order)?;
        self.chapters
            .iter()
            .find(|c| c.revelation_order == order.get())
            .ok_or_else(|| MushafError::NotFound {
                what: "revelation order",
                query: order.to_string(),
                suggestion: None,
            })
    }

    /// Translated name of the chapter called `name`.
    pub fn get_translated_name(&self, name: &str) -> Result<String> {
        Ok(self.find_by_name(name)?.translated_name.name.clone())
    }

    /// Canonical number of the chapter called `name`.
    pub fn get_number(&self, name: &str) -> Result<u32> {
        Ok(self.find_by_name(name)?.id)
    }

    /// Arabic name of the chapter called `name`.
    pub fn get_arabic(&self, name: &str) -> Result<String> {
        Ok(self.find_by_name(name)?.name_arabic.clone())
    }

    /// Revelation place of the chapter called `name`.
    pub fn get_revelation_place(&self, name: &str) -> Result<RevelationPlace> {
        Ok(self.find_by_name(name)?.revelation_place)
    }

    /// Revelation order of the chapter called `name`.
    pub fn get_revelation_order(&self, name: &str) -> Result<u32> {
        Ok(self.find_by_name(name)?.revelation_order)
    }

    /// Verse count of the chapter called `name`.
    pub fn get_verse_count(&self, name: &str) -> Result<u32> {
        Ok(self.find_by_name(name)?.verses_count)
    }

    /// Simple and complex name of the chapter whose translated name is `translated_name`.
    pub fn get_name_by_translated_name(&self, translated_name: &str) -> Result<ChapterNames> {
        Ok(self.find_by_translated_name(translated_name)?.names())
    }

    /// Simple and complex name of the chapter revealed at position `order`.
    pub fn get_chapter_by_revelation_order(&self, order: i64) -> Result<ChapterNames> {
        Ok(self.find_by_revelation_order(order)?.names())
    }
}

fn check_permutation(field: &str, values: impl Iterator<Item = u32>) -> Result<()> {
    let mut seen = [false; CHAPTER_COUNT as usize];
    for value in values {
        if value == 0 || value > CHAPTER_COUNT {
            return Err(MushafError::InvalidPayload(format!(
                "{field} {value} is outside 1..={CHAPTER_COUNT}"
            )));
        }
        let slot = &mut seen[(value - 1) as usize];
        if *slot {
            return Err(MushafError::InvalidPayload(format!(
                "{field} {value} appears more than once"
            )));
        }
        *slot = true;
    }
    Ok(())
}
