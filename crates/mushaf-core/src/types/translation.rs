use serde::{Deserialize, Serialize};

/// An available translation of the Qur'an text.
///
/// Only the identifying fields are kept; the remote listing carries more
/// (slug, author, translated name) which are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Translation {
    /// Resource id used to request verses in this translation.
    pub id: u32,
    /// Display name, usually named after the translator.
    pub name: String,
    /// Language of the translation (e.g. "english").
    pub language_name: String,
}
