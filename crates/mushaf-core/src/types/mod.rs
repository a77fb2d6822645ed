pub mod chapter;
pub mod number;
pub mod query;
pub mod translation;

pub use chapter::{Chapter, ChapterNames, RevelationPlace, TranslatedName};
pub use number::{CHAPTER_COUNT, ChapterNumber};
pub use query::{Notation, Order};
pub use translation::Translation;
