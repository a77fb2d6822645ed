//! Client configuration.

use reqwest::Url;

use mushaf_core::{ChapterNumber, MushafError, Result};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.quran.com/api/v4";

/// Default language for translated chapter names.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Dr. Mustafa Khattab, The Clear Quran.
pub const DEFAULT_TRANSLATION_ID: u32 = 131;

/// Environment variable overriding [`ClientConfig::base_url`].
pub const ENV_BASE_URL: &str = "MUSHAF_API_BASE_URL";
/// Environment variable overriding [`ClientConfig::language`].
pub const ENV_LANGUAGE: &str = "MUSHAF_LANGUAGE";
/// Environment variable overriding [`ClientConfig::default_translation_id`].
pub const ENV_TRANSLATION_ID: &str = "MUSHAF_TRANSLATION_ID";

/// Configuration shared by the chapter and translation catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Language code sent with chapter requests.
    pub language: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Translation used when the caller does not pick one.
    pub default_translation_id: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            user_agent: concat!("mushaf/", env!("CARGO_PKG_VERSION")).to_string(),
            default_translation_id: DEFAULT_TRANSLATION_ID,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with the `MUSHAF_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `MushafError::Config` if `MUSHAF_TRANSLATION_ID` is not a number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values produced by `lookup`, keyed by the
    /// `MUSHAF_*` variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(base_url);
        }
        if let Some(language) = lookup(ENV_LANGUAGE) {
            config = config.with_language(language);
        }
        if let Some(raw) = lookup(ENV_TRANSLATION_ID) {
            let id = raw.trim().parse::<u32>().map_err(|e| {
                MushafError::Config(format!("{ENV_TRANSLATION_ID}={raw:?} is not a translation id: {e}"))
            })?;
            config = config.with_default_translation_id(id);
        }
        Ok(config)
    }

    /// Set the API root. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the language for translated chapter names.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into().trim().to_string();
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the default translation id.
    pub fn with_default_translation_id(mut self, id: u32) -> Self {
        self.default_translation_id = id;
        self
    }

    /// Checks that the configuration can produce request URLs.
    ///
    /// # Errors
    ///
    /// Returns `MushafError::Config` for an empty language or a base URL that
    /// is not an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        if self.language.is_empty() {
            return Err(MushafError::Config("language must not be empty".into()));
        }
        let url = self.parse_base()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(MushafError::Config(format!(
                "base URL {:?} must use http or https",
                self.base_url
            )));
        }
        Ok(())
    }

    fn parse_base(&self) -> Result<Url> {
        Url::parse(&self.base_url)
            .map_err(|e| MushafError::Config(format!("invalid base URL {:?}: {e}", self.base_url)))
    }

    fn endpoint(&self, path: &str, with_language: bool) -> Result<String> {
        let mut url = self.parse_base()?;
        url.path_segments_mut()
            .map_err(|()| MushafError::Config(format!("base URL {:?} cannot have a path", self.base_url)))?
            .pop_if_empty()
            .extend(path.split('/'));
        if with_language {
            url.query_pairs_mut().append_pair("language", &self.language);
        }
        Ok(url.into())
    }

    /// `{base}/chapters?language={language}`
    pub fn chapters_url(&self) -> Result<String> {
        self.endpoint("chapters", true)
    }

    /// `{base}/chapters/{number}?language={language}`
    pub fn chapter_url(&self, number: ChapterNumber) -> Result<String> {
        self.endpoint(&format!("chapters/{number}"), true)
    }

    /// `{base}/resources/translations`
    pub fn translations_url(&self) -> Result<String> {
        self.endpoint("resources/translations", false)
    }
}
