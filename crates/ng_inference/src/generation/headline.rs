use ng_core::{Error, Locale, Result};
use tracing::info;

use super::prompts;
use super::ModelRoute;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHeadline {
    pub headline: String,
    pub detail: String,
}

#[derive(Debug, Clone)]
pub struct HeadlineGenerator {
    route: ModelRoute,
}

impl HeadlineGenerator {
    pub fn new(route: ModelRoute) -> Self {
        Self { route }
    }

    pub fn model(&self) -> &str {
        self.route.model()
    }

    pub async fn generate(
        &self,
        outlet: &str,
        locale: Locale,
        is_fake: bool,
        used_headlines: &[String],
    ) -> Result<GeneratedHeadline> {
        info!(
            "📰 Generating headline with {} for `{}` in `{}` (fake: {})",
            self.route.model(),
            outlet,
            locale,
            is_fake
        );
        let messages = prompts::headline_messages(outlet, locale, is_fake, used_headlines);
        let text = self.route.complete(&messages).await?;
        parse_headline_response(&text)
    }
}

const QUOTE_PAIRS: [(char, char); 2] = [('"', '"'), ('“', '”')];

/// Trims whitespace, and one pair of quotes only when they wrap the whole line.
fn clean_line(line: &str) -> String {
    let line = line.trim();
    for (open, close) in QUOTE_PAIRS {
        if let Some(inner) = line
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            // `"Brexit" deal "collapses"` starts and ends with quotes but is not wrapped.
            if !inner.contains(open) && !inner.contains(close) {
                return inner.trim().to_string();
            }
        }
    }
    line.to_string()
}

/// First non-blank line is the headline, the next one the detail.
/// Anything after that is ignored.
pub fn parse_headline_response(text: &str) -> Result<GeneratedHeadline> {
    let mut lines = text.lines().map(clean_line).filter(|l| !l.is_empty());
    match (lines.next(), lines.next()) {
        (Some(headline), Some(detail)) => Ok(GeneratedHeadline { headline, detail }),
        _ => Err(Error::MalformedResponse(format!(
            "expected a headline line and a detail line, got: {:?}",
            text
        ))),
    }
}
