use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use ng_core::{ChatMessage, ChatModel, Error, Result};
use reqwest::Client;
use url::Url;

use super::{ChatRequest, ChatResponse};

/// Client for any endpoint speaking the OpenAI chat-completions format.
pub struct OpenAiModel {
    name: String,
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl fmt::Debug for OpenAiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiModel")
            .field("name", &self.name)
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl OpenAiModel {
    pub fn new(name: String, base_url: &str, api_key: String, timeout: Duration) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(Error::MissingConfig(format!("{} API key is empty", name)));
        }
        let endpoint = chat_endpoint(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            name,
            client,
            api_key,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn chat_endpoint(base_url: &str) -> Result<Url> {
    // A trailing slash keeps `join` from replacing the last path segment.
    let base = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&base)
        .and_then(|url| url.join("chat/completions"))
        .map_err(|e| Error::InvalidInput(format!("invalid base URL '{}': {}", base_url, e)))
}

#[async_trait]
impl ChatModel for OpenAiModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatRequest { model, messages };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<ChatResponse>().await?.into_text()
    }
}
