pub mod json_file;
pub mod memory;

#[cfg(feature = "mongodb")]
pub mod mongo;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

#[cfg(feature = "mongodb")]
pub use mongo::MongoStore;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::Utc;
    use ng_core::{Article, Locale, LocalizedText, Localizations};

    pub fn article(uid: &str, headline: &str) -> Article {
        let mut localized = Localizations::new();
        localized.insert(
            Locale::En,
            LocalizedText::complete(headline.to_string(), "Detail".to_string(), "Body".to_string()),
        );
        Article {
            uid: uid.to_string(),
            created_at: Utc::now(),
            origin_locale: Locale::En,
            outlet: "The Guardian".to_string(),
            is_fake: true,
            detail: "Detail".to_string(),
            headline: headline.to_string(),
            content: "Body".to_string(),
            headline_model_used: "gpt-4o-mini".to_string(),
            content_model_used: "gpt-4o".to_string(),
            translation_model_used: "gpt-4o-mini".to_string(),
            localized,
            translation_failures: Vec::new(),
        }
    }
}
