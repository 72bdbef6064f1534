//! The article pipeline: headline, then body, then translations.

use std::sync::Arc;

use ng_core::{ChatMessage, ChatModel, Result};
use tracing::debug;

pub mod article;
pub mod content;
pub mod headline;
pub mod prompts;
pub mod translation;

pub use article::{ArticleGenerator, GenerationRequest, Selection};
pub use content::ContentGenerator;
pub use headline::{GeneratedHeadline, HeadlineGenerator};
pub use translation::Translator;

/// A chat model paired with the model name to request from it.
#[derive(Debug, Clone)]
pub struct ModelRoute {
    client: Arc<dyn ChatModel>,
    model: String,
}

impl ModelRoute {
    pub fn new(client: Arc<dyn ChatModel>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Same client, different model name.
    pub fn with_model(&self, model: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            model: model.into(),
        }
    }

    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        debug!(
            "➡️ {} / {}: sending {} messages",
            self.client.name(),
            self.model,
            messages.len()
        );
        for message in messages {
            debug!("   {:?}: {}", message.role, message.content);
        }
        let text = self.client.complete(&self.model, messages).await?;
        debug!("⬅️ {} / {}:\n{}", self.client.name(), self.model, text);
        Ok(text)
    }
}
