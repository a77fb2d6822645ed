//! # Mushaf
//!
//! Qur'an chapter metadata (names, revelation place and order, verse counts,
//! translated names) and the list of available translations, fetched from the
//! quran.com API.
//!
//! ```rust,no_run
//! use mushaf::{ChapterCatalog, Notation, RevelationPlace};
//!
//! # fn main() -> mushaf::Result<()> {
//! let catalog = ChapterCatalog::new()?;
//! let medinan = catalog.list_by_place(RevelationPlace::Madinah, Notation::Complex)?;
//! let (simple, complex): (String, String) = catalog.get_chapter_by_number(112)?.into();
//! println!("{simple} / {complex}; {} Medinan chapters", medinan.len());
//! # Ok(())
//! # }
//! ```

pub use mushaf_client::{
    ChapterCatalog, ClientConfig, HttpTransport, RawResponse, TranslationCatalog, Transport,
};
pub use mushaf_core::{
    CHAPTER_COUNT, Chapter, ChapterIndex, ChapterNames, ChapterNumber, MushafError, Notation,
    Order, Result, RevelationPlace, TranslatedName, Translation,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
