use std::fmt;

use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};
use ng_core::{Article, ArticleStore, Error, Result};
use tracing::info;

use crate::{DatabaseMode, ARTICLES_COLLECTION};

/// Inserts articles into the `articles` collection of the database picked by
/// [`DatabaseMode`]. Inserts only: re-running with the same records stores
/// duplicates.
pub struct MongoStore {
    client: Client,
    mode: DatabaseMode,
}

impl fmt::Debug for MongoStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MongoStore")
            .field("client", &"<mongodb::Client>")
            .field("mode", &self.mode)
            .finish()
    }
}

impl MongoStore {
    pub async fn connect(connection_string: &str, mode: DatabaseMode) -> Result<Self> {
        if connection_string.trim().is_empty() {
            return Err(Error::MissingConfig(format!(
                "MongoDB connection string is not set. Please set the {} environment variable",
                crate::CONNECTION_STRING_ENV
            )));
        }
        let client = Client::with_uri_str(connection_string)
            .await
            .map_err(|e| Error::Database(format!("Failed to connect to MongoDB: {}", e)))?;
        Ok(Self { client, mode })
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.client
            .database(self.mode.database_name())
            .collection::<T>(ARTICLES_COLLECTION)
    }
}

#[async_trait]
impl ArticleStore for MongoStore {
    async fn store_articles(&self, articles: &[Article]) -> Result<usize> {
        if articles.is_empty() {
            return Ok(0);
        }
        info!(
            "🏦 Storing {} articles in database `{}`",
            articles.len(),
            self.mode.database_name()
        );
        let result = self
            .collection::<Article>()
            .insert_many(articles)
            .await
            .map_err(|e| Error::Database(format!("Failed to insert articles: {}", e)))?;
        Ok(result.inserted_ids.len())
    }

    async fn count(&self) -> Result<usize> {
        let count = self
            .collection::<Document>()
            .count_documents(doc! {})
            .await
            .map_err(|e| Error::Database(format!("Failed to count articles: {}", e)))?;
        Ok(count as usize)
    }

    fn describe(&self) -> String {
        format!("database {}/{}", self.mode.database_name(), ARTICLES_COLLECTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_requires_connection_string() {
        let result = MongoStore::connect("  ", DatabaseMode::Testing).await;
        assert!(matches!(
            result,
            Err(Error::MissingConfig(msg)) if msg.contains("JUDGE_GPT_MONGODB")
        ));
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_uri() {
        let result = MongoStore::connect("not-a-mongo-uri", DatabaseMode::Dev).await;
        assert!(matches!(result, Err(Error::Database(_))));
    }
}
