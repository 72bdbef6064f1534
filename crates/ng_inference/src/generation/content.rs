use ng_core::{Locale, Result};
use tracing::info;

use super::prompts;
use super::ModelRoute;

#[derive(Debug, Clone)]
pub struct ContentGenerator {
    route: ModelRoute,
}

impl ContentGenerator {
    pub fn new(route: ModelRoute) -> Self {
        Self { route }
    }

    pub fn model(&self) -> &str {
        self.route.model()
    }

    /// Generator using the same client but a different model.
    pub fn with_model(&self, model: &str) -> Self {
        Self {
            route: self.route.with_model(model),
        }
    }

    /// Article body for an already generated headline, returned verbatim.
    pub async fn generate(
        &self,
        locale: Locale,
        outlet: &str,
        headline: &str,
        detail: &str,
        is_fake: bool,
    ) -> Result<String> {
        info!(
            "✍️ Generating content with {} for `{}` in `{}` style (fake: {})",
            self.route.model(),
            locale,
            outlet,
            is_fake
        );
        let messages = prompts::content_messages(locale, outlet, headline, detail, is_fake);
        self.route.complete(&messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DummyModel;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_content_is_returned_verbatim() {
        let body = "First paragraph.\n\nSecond paragraph.";
        let model = Arc::new(DummyModel::with_responses([body]));
        let generator = ContentGenerator::new(ModelRoute::new(model.clone(), "gpt-4o"));

        let content = generator
            .with_model("gpt-4")
            .generate(Locale::En, "NPR", "Headline", "Detail", false)
            .await
            .unwrap();
        assert_eq!(content, body);
        assert_eq!(model.calls()[0].model, "gpt-4");
    }
}
