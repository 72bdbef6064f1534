use std::path::PathBuf;

use async_trait::async_trait;
use ng_core::{Article, ArticleStore, Result};
use tracing::info;

use crate::json::{read_json, write_json};

/// A JSON array of articles on disk.
///
/// Every write reads the whole file, appends and rewrites it. Two processes
/// writing the same file at once will lose updates.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// All stored articles. A missing file is an empty store.
    pub async fn load(&self) -> Result<Vec<Article>> {
        Ok(read_json(&self.path).await?.unwrap_or_default())
    }
}

#[async_trait]
impl ArticleStore for JsonFileStore {
    async fn store_articles(&self, articles: &[Article]) -> Result<usize> {
        let mut stored = self.load().await?;
        let previous = stored.len();
        stored.extend_from_slice(articles);
        write_json(&self.path, &stored).await?;
        info!(
            "💾 Stored {} articles in {} ({} -> {})",
            articles.len(),
            self.path.display(),
            previous,
            stored.len()
        );
        Ok(articles.len())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.load().await?.len())
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::test_support::article;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("articles.json"));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_store_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("articles.json");
        let store = JsonFileStore::new(&path);

        store.store_articles(&[article("a", "First")]).await.unwrap();
        let written = store
            .store_articles(&[article("b", "Second"), article("a", "First")])
            .await
            .unwrap();
        assert_eq!(written, 2);

        let articles = store.load().await.unwrap();
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].headline, "First");
        assert_eq!(articles[1].headline, "Second");

        // The file is a plain array of flat records.
        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw.as_array().unwrap().len(), 3);
        assert_eq!(raw[0]["localized_title_en"], "First");
        assert!(!dir.path().join("nested").join("articles.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("articles.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.store_articles(&[article("a", "First")]).await,
            Err(ng_core::Error::Serialization(_))
        ));
        // The broken file is left as it was.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }
}
