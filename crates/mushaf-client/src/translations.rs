//! Available translations.

use mushaf_core::{Result, Translation};
use tracing::debug;

use crate::config::ClientConfig;
use crate::transport::{HttpTransport, Transport, fetch_json};
use crate::wire::TranslationsEnvelope;

/// Lists the translations offered by the remote API.
///
/// Nothing is cached: each call performs one request.
#[derive(Debug)]
pub struct TranslationCatalog<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
}

impl TranslationCatalog<HttpTransport> {
    /// Catalog over the public API with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Catalog over an HTTP client built from `config`.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self { transport, config })
    }
}

impl<T: Transport> TranslationCatalog<T> {
    /// Catalog issuing its requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self { transport, config })
    }

    /// The transport requests go through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Translation id used when the caller does not choose one.
    #[must_use]
    pub fn default_translation_id(&self) -> u32 {
        self.config.default_translation_id
    }

    /// Fetches every available translation as `{id, name, language_name}`.
    ///
    /// # Errors
    ///
    /// Returns `MushafError::RemoteUnavailable` on a non-200 status and
    /// `MushafError::Decode` if the body is not a translation listing.
    pub fn list_translations(&self) -> Result<Vec<Translation>> {
        let url = self.config.translations_url()?;
        let envelope: TranslationsEnvelope = fetch_json(&self.transport, &url)?;
        debug!(count = envelope.translations.len(), "listed translations");
        Ok(envelope.translations)
    }

    /// Same listing as [`list_translations`](Self::list_translations), as a
    /// pretty-printed JSON array.
    pub fn list_translations_json(&self) -> Result<String> {
        let translations = self.list_translations()?;
        Ok(serde_json::to_string_pretty(&translations)?)
    }
}
