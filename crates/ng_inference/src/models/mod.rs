use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use ng_core::{ChatMessage, ChatModel, Error, Result};
use serde::{Deserialize, Serialize};

use crate::Config;

pub mod dummy;
pub mod openai;

pub use dummy::DummyModel;
pub use openai::OpenAiModel;

#[derive(Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: Message,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Message {
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, trimmed. Missing or blank content is an error.
    pub fn into_text(self) -> Result<String> {
        let content = self
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .unwrap_or_default();
        if content.is_empty() {
            return Err(Error::MalformedResponse(
                "response contained no message content".to_string(),
            ));
        }
        Ok(content)
    }
}

/// Which chat-completion service to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// api.openai.com
    OpenAi,
    /// GitHub Models, served from the Azure AI inference endpoint.
    GitHub,
    /// Offline stand-in; never touches the network.
    Dummy,
}

impl Provider {
    pub fn default_base_url(&self) -> Option<&'static str> {
        match self {
            Provider::OpenAi => Some("https://api.openai.com/v1"),
            Provider::GitHub => Some("https://models.inference.ai.azure.com"),
            Provider::Dummy => None,
        }
    }

    /// Environment variable the provider's credential is read from.
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            Provider::OpenAi => Some("JUDGE_GPT_OPENAI_API_KEY"),
            Provider::GitHub => Some("GITHUB_TOKEN"),
            Provider::Dummy => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::OpenAi => "openai",
            Provider::GitHub => "github",
            Provider::Dummy => "dummy",
        })
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "github" | "azure" => Ok(Provider::GitHub),
            "dummy" => Ok(Provider::Dummy),
            other => Err(Error::InvalidInput(format!(
                "unknown provider '{}'. Available providers: openai, github, dummy",
                other
            ))),
        }
    }
}

/// Build the chat model for `provider`. Fails fast when a required key is missing.
pub fn create_model(provider: Provider, config: &Config) -> Result<Arc<dyn ChatModel>> {
    match provider {
        Provider::Dummy => Ok(Arc::new(DummyModel::new())),
        Provider::OpenAi | Provider::GitHub => {
            let base_url = config
                .base_url
                .clone()
                .or_else(|| provider.default_base_url().map(str::to_string))
                .ok_or_else(|| Error::MissingConfig(format!("no base URL for {}", provider)))?;
            let api_key = config.api_key.clone().ok_or_else(|| {
                Error::MissingConfig(format!(
                    "{} API key is not set. Please set the {} environment variable",
                    provider,
                    provider.api_key_env().unwrap_or("API key")
                ))
            })?;
            let model = OpenAiModel::new(provider.to_string(), &base_url, api_key, config.timeout)?;
            Ok(Arc::new(model))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_is_trimmed() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"  Hello\nWorld \n"}}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "Hello\nWorld");
    }

    #[test]
    fn test_response_without_content_is_malformed() {
        for body in [
            r#"{"choices":[]}"#,
            r#"{}"#,
            r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#,
            r#"{"choices":[{"message":{"role":"assistant","content":"   "}}]}"#,
        ] {
            let response: ChatResponse = serde_json::from_str(body).unwrap();
            assert!(matches!(response.into_text(), Err(Error::MalformedResponse(_))), "{}", body);
        }
    }

    #[test]
    fn test_request_wire_format() {
        let messages = vec![ChatMessage::system("be brief"), ChatMessage::user("hi")];
        let request = ChatRequest { model: "gpt-4o-mini", messages: &messages };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
    }

    #[test]
    fn test_create_model_requires_api_key() {
        let result = create_model(Provider::OpenAi, &Config::default());
        match result {
            Err(Error::MissingConfig(msg)) => assert!(msg.contains("JUDGE_GPT_OPENAI_API_KEY")),
            other => panic!("expected MissingConfig, got {:?}", other),
        }

        let result = create_model(Provider::GitHub, &Config::default());
        assert!(matches!(result, Err(Error::MissingConfig(msg)) if msg.contains("GITHUB_TOKEN")));
    }

    #[test]
    fn test_create_dummy_model_needs_nothing() {
        let model = create_model(Provider::Dummy, &Config::default()).unwrap();
        assert_eq!(model.name(), "Dummy");
    }

    #[test]
    fn test_parse_provider() {
        assert_eq!("OpenAI".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert_eq!("azure".parse::<Provider>().unwrap(), Provider::GitHub);
        assert!("ollama".parse::<Provider>().is_err());
    }
}
