//! # Chapter Catalog
//!
//! Fetches the chapter list once at construction and answers every list and
//! name lookup from that payload. Lookups by chapter number go back to the
//! single-chapter endpoint.

use tracing::{info, warn};

use mushaf_core::{
    Chapter, ChapterIndex, ChapterNames, ChapterNumber, MushafError, Notation, Order, Result,
    RevelationPlace,
};

use crate::config::ClientConfig;
use crate::transport::{HttpTransport, Transport, fetch, fetch_json};
use crate::wire::{ChapterEnvelope, ChaptersEnvelope};

/// Chapter metadata backed by one fetch of the chapter listing.
///
/// When that fetch answered with a non-200 status the catalog is still
/// constructed, but every query over the listing returns
/// `MushafError::RemoteUnavailable` carrying that status.
#[derive(Debug)]
pub struct ChapterCatalog<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
    url: String,
    status: u16,
    index: Option<ChapterIndex>,
}

impl ChapterCatalog<HttpTransport> {
    /// Fetches the chapter list from the public API with default settings.
    ///
    /// # Errors
    ///
    /// See [`with_transport`](ChapterCatalog::with_transport).
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Fetches the chapter list through an HTTP client built from `config`.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> ChapterCatalog<T> {
    /// Fetches the chapter list through `transport`.
    ///
    /// # Errors
    ///
    /// - `MushafError::Config` if `config` is invalid.
    /// - `MushafError::Transport` if no response was received.
    /// - `MushafError::Decode` / `MushafError::InvalidPayload` if a 200
    ///   response does not hold the 114 chapters.
    ///
    /// A non-200 status is not an error here; it is retained and reported by
    /// each query.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        let url = config.chapters_url()?;
        let response = fetch(&transport, &url)?;

        let index = if response.is_ok() {
            let envelope: ChaptersEnvelope = response.json()?;
            let index = ChapterIndex::new(envelope.chapters)?;
            info!(chapters = index.len(), language = %config.language, "loaded chapter catalog");
            Some(index)
        } else {
            warn!(status = response.status, "chapter catalog unavailable");
            None
        };

        Ok(Self {
            transport,
            config,
            url,
            status: response.status,
            index,
        })
    }

    /// HTTP status of the construction fetch.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns `true` if the construction fetch succeeded.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.index.is_some()
    }

    /// The configuration this catalog was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The transport requests go through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn index(&self) -> Result<&ChapterIndex> {
        self.index.as_ref().ok_or_else(|| MushafError::RemoteUnavailable {
            status: self.status,
            url: self.url.clone(),
        })
    }

    /// Every retained chapter, canonical order.
    pub fn chapters(&self) -> Result<&[Chapter]> {
        Ok(self.index()?.chapters())
    }

    /// Every chapter name in `notation`, in canonical or revelation order.
    pub fn list_names(&self, notation: Notation, order: Order) -> Result<Vec<String>> {
        Ok(self.index()?.list_names(notation, order))
    }

    /// Every chapter name in Arabic script.
    pub fn list_arabic_names(&self) -> Result<Vec<String>> {
        Ok(self.index()?.list_arabic_names())
    }

    /// Every translated chapter name.
    pub fn list_translated_names(&self) -> Result<Vec<String>> {
        Ok(self.index()?.list_translated_names())
    }

    /// Names of the chapters revealed at `place`.
    pub fn list_by_place(&self, place: RevelationPlace, notation: Notation) -> Result<Vec<String>> {
        Ok(self.index()?.list_by_place(place, notation))
    }

    /// The chapter whose simple or complex name is exactly `name`.
    pub fn find_by_name(&self, name: &str) -> Result<Chapter> {
        self.index()?.find_by_name(name).cloned()
    }

    /// Translated name of the chapter called `name`.
    pub fn get_translated_name(&self, name: &str) -> Result<String> {
        self.index()?.get_translated_name(name)
    }

    /// Canonical number of the chapter called `name`.
    pub fn get_number(&self, name: &str) -> Result<u32> {
        self.index()?.get_number(name)
    }

    /// Arabic name of the chapter called `name`.
    pub fn get_arabic(&self, name: &str) -> Result<String> {
        self.index()?.get_arabic(name)
    }

    /// Revelation place of the chapter called `name`.
    pub fn get_revelation_place(&self, name: &str) -> Result<RevelationPlace> {
        self.index()?.get_revelation_place(name)
    }

    /// Revelation order of the chapter called `name`.
    pub fn get_revelation_order(&self, name: &str) -> Result<u32> {
        self.index()?.get_revelation_order(name)
    }

    /// Verse count of the chapter called `name`.
    pub fn get_verse_count(&self, name: &str) -> Result<u32> {
        self.index()?.get_verse_count(name)
    }

    /// Simple and complex name of the chapter whose translated name is
    /// exactly `translated_name`.
    pub fn get_name_by_translated_name(&self, translated_name: &str) -> Result<ChapterNames> {
        self.index()?.get_name_by_translated_name(translated_name)
    }

    /// Simple and complex name of the chapter revealed at position `order`.
    ///
    /// # Errors
    ///
    /// `MushafError::InvalidArgument` if `order` is outside 1..=114. The
    /// argument is checked before the catalog's availability.
    pub fn get_chapter_by_revelation_order(&self, order: i64) -> Result<ChapterNames> {
        ChapterNumber::new("revelation_order", order)?;
        self.index()?.get_chapter_by_revelation_order(order)
    }

    /// Simple and complex name of chapter `number`, from the single-chapter
    /// endpoint.
    ///
    /// # Errors
    ///
    /// `MushafError::InvalidArgument` if `number` is outside 1..=114, before
    /// any request is made. `MushafError::RemoteUnavailable` if that request
    /// answers with a non-200 status.
    pub fn get_chapter_by_number(&self, number: i64) -> Result<ChapterNames> {
        Ok(self.fetch_chapter(number)?.names())
    }

    /// Revelation order of chapter `number`, from the single-chapter endpoint.
    pub fn get_revelation_order_by_number(&self, number: i64) -> Result<u32> {
        Ok(self.fetch_chapter(number)?.revelation_order)
    }

    fn fetch_chapter(&self, number: i64) -> Result<Chapter> {
        let number = ChapterNumber::new("number", number)?;
        let url = self.config.chapter_url(number)?;
        let envelope: ChapterEnvelope = fetch_json(&self.transport, &url)?;
        if envelope.chapter.id != number.get() {
            return Err(MushafError::InvalidPayload(format!(
                "requested chapter {number}, received chapter {}",
                envelope.chapter.id
            )));
        }
        Ok(envelope.chapter)
    }
}
