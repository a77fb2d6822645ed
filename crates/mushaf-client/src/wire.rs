//! JSON envelopes of the remote endpoints.

use serde::Deserialize;

use mushaf_core::{Chapter, Translation};

/// `GET /chapters`
#[derive(Debug, Deserialize)]
pub(crate) struct ChaptersEnvelope {
    pub chapters: Vec<Chapter>,
}

/// `GET /chapters/{n}`
#[derive(Debug, Deserialize)]
pub(crate) struct ChapterEnvelope {
    pub chapter: Chapter,
}

/// `GET /resources/translations`
#[derive(Debug, Deserialize)]
pub(crate) struct TranslationsEnvelope {
    pub translations: Vec<Translation>,
}
