use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MushafError, Result};

/// Number of chapters in the Qur'an.
pub const CHAPTER_COUNT: u32 = 114;

/// A position in 1..=114, used for both chapter ids and revelation orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct ChapterNumber(u32);

impl ChapterNumber {
    /// Validates `value` as a chapter position.
    ///
    /// `param` names the argument in the error, so callers can report
    /// which parameter was out of range.
    ///
    /// # Errors
    ///
    /// Returns `MushafError::InvalidArgument` if `value` is outside 1..=114.
    pub fn new(param: &'static str, value: i64) -> Result<Self> {
        if value < 1 {
            return Err(MushafError::InvalidArgument {
                name: param,
                value: value.to_string(),
                reason: format!("must be between 1 and {CHAPTER_COUNT}; the Qur'an has no chapter {value}"),
            });
        }
        if value > i64::from(CHAPTER_COUNT) {
            return Err(MushafError::InvalidArgument {
                name: param,
                value: value.to_string(),
                reason: format!("must be between 1 and {CHAPTER_COUNT}; the Qur'an has only {CHAPTER_COUNT} chapters"),
            });
        }
        // Range checked above, the cast cannot truncate.
        Ok(Self(value as u32))
    }

    /// Returns the number as a `u32`.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for ChapterNumber {
    type Error = MushafError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new("number", value)
    }
}

impl From<ChapterNumber> for u32 {
    fn from(number: ChapterNumber) -> Self {
        number.0
    }
}

impl fmt::Display for ChapterNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
