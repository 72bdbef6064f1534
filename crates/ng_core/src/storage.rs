use async_trait::async_trait;

use crate::types::Article;
use crate::Result;

#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Append `articles` to the store and return how many were written.
    /// Records are never merged: storing the same article twice yields two copies.
    async fn store_articles(&self, articles: &[Article]) -> Result<usize>;

    /// Number of articles currently held.
    async fn count(&self) -> Result<usize>;

    /// Short description of where articles go, for logs.
    fn describe(&self) -> String;
}
