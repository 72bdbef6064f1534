use std::fmt;
use std::time::Duration;

pub mod generation;
pub mod models;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Connection settings for one chat-completion provider.
#[derive(Clone)]
pub struct Config {
    pub api_key: Option<String>,
    /// Overrides the provider's default endpoint.
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub mod prelude {
    pub use super::generation::{
        ArticleGenerator, ContentGenerator, GenerationRequest, HeadlineGenerator, ModelRoute,
        Selection, Translator,
    };
    pub use super::models::{create_model, Provider};
    pub use super::Config;
    pub use ng_core::{Article, Error, Locale, Result};
}

pub use models::{create_model, Provider};
