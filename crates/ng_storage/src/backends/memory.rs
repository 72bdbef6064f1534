use async_trait::async_trait;
use ng_core::{Article, ArticleStore, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps articles in process memory. Used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    articles: Arc<RwLock<Vec<Article>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn articles(&self) -> Vec<Article> {
        self.articles.read().await.clone()
    }
}

#[async_trait]
impl ArticleStore for MemoryStore {
    async fn store_articles(&self, articles: &[Article]) -> Result<usize> {
        let mut store = self.articles.write().await;
        store.extend_from_slice(articles);
        Ok(articles.len())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.articles.read().await.len())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::test_support::article;

    #[tokio::test]
    async fn test_memory_store_never_merges() {
        let storage = MemoryStore::new();
        let a = article("same-uid", "Headline");
        storage.store_articles(&[a.clone()]).await.unwrap();
        storage.store_articles(&[a.clone(), a]).await.unwrap();
        assert_eq!(storage.count().await.unwrap(), 3);
        assert_eq!(storage.articles().await[2].uid, "same-uid");
    }
}
