//! # Mushaf Client
//!
//! Blocking access to the quran.com v4 chapter and translation endpoints.
//! [`ChapterCatalog`] fetches the chapter listing once and answers queries
//! from it; [`TranslationCatalog`] lists translations on demand.
//!
//! ```rust,no_run
//! use mushaf_client::{ChapterCatalog, Notation, Order};
//!
//! # fn main() -> mushaf_client::Result<()> {
//! let catalog = ChapterCatalog::new()?;
//! let names = catalog.list_names(Notation::Simple, Order::Canonical)?;
//! assert_eq!(names.len(), 114);
//! assert_eq!(catalog.get_translated_name("Al-Fatihah")?, "The Opener");
//! # Ok(())
//! # }
//! ```
pub mod chapters;
pub mod config;
pub mod transport;
pub mod translations;
mod wire;

pub use chapters::ChapterCatalog;
pub use config::ClientConfig;
pub use translations::TranslationCatalog;
pub use transport::{HttpTransport, RawResponse, Transport};

pub use mushaf_core::{
    Chapter, ChapterNames, MushafError, Notation, Order, Result, RevelationPlace, Translation,
};
