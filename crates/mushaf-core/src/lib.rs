//! # Mushaf Core
//!
//! Plain records for the Qur'an's chapter metadata, argument validation,
//! and the in-memory queries behind the chapter catalog. Nothing in this
//! crate performs I/O.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mushaf_core::{ChapterIndex, Notation, Order};
//!
//! let index = ChapterIndex::new(chapters)?;
//! let names = index.list_names(Notation::Simple, Order::Revelation);
//!
//! assert_eq!(names[0], "Al-'Alaq");
//! assert_eq!(index.get_number("Al-Kahf")?, 18);
//! ```
pub mod error;
pub mod index;
pub mod types;

// Re-export primary API
pub use error::{MushafError, Result};
pub use index::ChapterIndex;
pub use types::{
    CHAPTER_COUNT, Chapter, ChapterNames, ChapterNumber, Notation, Order, RevelationPlace,
    TranslatedName, Translation,
};
