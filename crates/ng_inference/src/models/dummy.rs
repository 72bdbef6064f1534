use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;
use ng_core::{ChatMessage, ChatModel, Error, Result};

const DEFAULT_RESPONSE: &str =
    "Dummy headline for an offline run\nThis detail sentence was produced without calling any model.";

/// A call received by [`DummyModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Offline chat model. Replays queued responses in order, then falls back to a
/// fixed two-line reply. Every call is recorded.
pub struct DummyModel {
    script: Mutex<VecDeque<Result<String>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel").finish()
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let model = Self::new();
        for response in responses {
            model.push_response(response);
        }
        model
    }

    pub fn push_response(&self, response: impl Into<String>) {
        self.lock_script().push_back(Ok(response.into()));
    }

    pub fn push_error(&self, error: Error) {
        self.lock_script().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn lock_script(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<String>>> {
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ChatModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<String> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedCall {
                model: model.to_string(),
                messages: messages.to_vec(),
            });
        self.lock_script()
            .pop_front()
            .unwrap_or_else(|| Ok(DEFAULT_RESPONSE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dummy_model() {
        let model = DummyModel::with_responses(["first", "second"]);
        model.push_error(Error::MalformedResponse("boom".to_string()));

        let messages = [ChatMessage::user("hello")];
        assert_eq!(model.complete("m1", &messages).await.unwrap(), "first");
        assert_eq!(model.complete("m2", &messages).await.unwrap(), "second");
        assert!(model.complete("m3", &messages).await.is_err());

        // Script exhausted: fixed two-line fallback.
        let fallback = model.complete("m4", &messages).await.unwrap();
        assert_eq!(fallback.lines().count(), 2);

        let calls = model.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[1].model, "m2");
        assert_eq!(calls[0].messages, messages.to_vec());
    }
}
