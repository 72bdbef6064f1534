use ng_core::{Locale, Result, TextKind};
use tracing::info;

use super::prompts;
use super::ModelRoute;

#[derive(Debug, Clone)]
pub struct Translator {
    route: ModelRoute,
}

impl Translator {
    pub fn new(route: ModelRoute) -> Self {
        Self { route }
    }

    pub fn model(&self) -> &str {
        self.route.model()
    }

    pub async fn translate(
        &self,
        text: &str,
        kind: TextKind,
        source: Locale,
        target: Locale,
        outlet: &str,
    ) -> Result<String> {
        info!(
            "🌍 Translating {} from `{}` to `{}` with {} (style: `{}`)",
            kind,
            source,
            target,
            self.route.model(),
            outlet
        );
        let messages = prompts::translation_messages(text, kind, source, target, outlet);
        self.route.complete(&messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DummyModel;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_translate() {
        let model = Arc::new(DummyModel::with_responses(["Hallo Welt"]));
        let translator = Translator::new(ModelRoute::new(model.clone(), "gpt-4o-mini"));
        let out = translator
            .translate("Hello world", TextKind::Headline, Locale::En, Locale::De, "Reuters")
            .await
            .unwrap();
        assert_eq!(out, "Hallo Welt");
        assert!(model.calls()[0].messages[1].content.contains("Hello world"));
    }
}
