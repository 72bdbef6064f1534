pub mod error;
pub mod locales;
pub mod models;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use locales::Locale;
pub use models::{ChatMessage, ChatModel, Role};
pub use storage::ArticleStore;
pub use types::{
    generate_uid, generate_uid_with, Article, HeadlineEntry, LocalizedText, Localizations,
    TextKind, TranslationFailure,
};
