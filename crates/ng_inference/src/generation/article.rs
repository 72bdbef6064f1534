use chrono::Utc;
use ng_core::{
    generate_uid, Article, Error, Locale, LocalizedText, Localizations, Result, TextKind,
    TranslationFailure,
};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{info, warn};

use super::{ContentGenerator, HeadlineGenerator, Translator};

/// Candidates the pipeline picks from for each article.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub locales: Vec<Locale>,
    pub fake_choices: Vec<bool>,
    pub content_models: Vec<String>,
}

impl GenerationRequest {
    pub fn new(locales: Vec<Locale>, fake_choices: Vec<bool>, content_models: Vec<String>) -> Self {
        Self {
            locales,
            fake_choices,
            content_models,
        }
    }
}

/// Parameters chosen for one article before any model is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub locale: Locale,
    pub outlet: String,
    pub is_fake: bool,
    pub content_model: String,
}

impl Selection {
    /// Uniform picks of locale, then an outlet of that locale, then the
    /// authenticity flag, then the content model. Same seed, same picks.
    pub fn pick<R: Rng>(rng: &mut R, request: &GenerationRequest) -> Result<Self> {
        let locale = *request
            .locales
            .choose(rng)
            .ok_or_else(|| Error::InvalidInput("no locales to choose from".to_string()))?;
        let outlet = locale
            .outlets()
            .choose(rng)
            .ok_or_else(|| Error::InvalidInput(format!("no outlets for locale {}", locale)))?
            .to_string();
        let is_fake = *request
            .fake_choices
            .choose(rng)
            .ok_or_else(|| Error::InvalidInput("no authenticity choices".to_string()))?;
        let content_model = request
            .content_models
            .choose(rng)
            .ok_or_else(|| Error::InvalidInput("no content models to choose from".to_string()))?
            .clone();
        Ok(Self {
            locale,
            outlet,
            is_fake,
            content_model,
        })
    }
}

/// Runs headline, content and translation stages for one article.
#[derive(Debug, Clone)]
pub struct ArticleGenerator {
    headlines: HeadlineGenerator,
    content: ContentGenerator,
    translator: Translator,
}

impl ArticleGenerator {
    pub fn new(
        headlines: HeadlineGenerator,
        content: ContentGenerator,
        translator: Translator,
    ) -> Self {
        Self {
            headlines,
            content,
            translator,
        }
    }

    /// Generate one article for `selection`.
    ///
    /// A failed headline or content stage fails the whole run, so no partial
    /// record ever escapes. A failed translation leaves that field `None` and
    /// is listed in `translation_failures`.
    pub async fn generate(
        &self,
        selection: &Selection,
        used_headlines: &[String],
    ) -> Result<Article> {
        info!(
            "🗞️ Generating article in `{}` as `{}` (fake: {}, content model: {})",
            selection.locale, selection.outlet, selection.is_fake, selection.content_model
        );

        let headline = self
            .headlines
            .generate(&selection.outlet, selection.locale, selection.is_fake, used_headlines)
            .await?;

        let content = self
            .content
            .with_model(&selection.content_model)
            .generate(
                selection.locale,
                &selection.outlet,
                &headline.headline,
                &headline.detail,
                selection.is_fake,
            )
            .await?;

        let mut localized = Localizations::new();
        localized.insert(
            selection.locale,
            LocalizedText::complete(
                headline.headline.clone(),
                headline.detail.clone(),
                content.clone(),
            ),
        );

        let mut failures = Vec::new();
        for target in selection.locale.others() {
            let mut text = LocalizedText::default();
            for (kind, source) in [
                (TextKind::Headline, &headline.headline),
                (TextKind::Detail, &headline.detail),
                (TextKind::Content, &content),
            ] {
                match self
                    .translator
                    .translate(source, kind, selection.locale, target, &selection.outlet)
                    .await
                {
                    Ok(translated) => text.set(kind, Some(translated)),
                    Err(e) => {
                        warn!("⚠️ Failed to translate {} to `{}`: {}", kind, target, e);
                        failures.push(TranslationFailure {
                            locale: target,
                            kind,
                            reason: e.to_string(),
                        });
                    }
                }
            }
            localized.insert(target, text);
        }

        let article = Article {
            uid: generate_uid(),
            created_at: Utc::now(),
            origin_locale: selection.locale,
            outlet: selection.outlet.clone(),
            is_fake: selection.is_fake,
            detail: headline.detail,
            headline: headline.headline,
            content,
            headline_model_used: self.headlines.model().to_string(),
            content_model_used: selection.content_model.clone(),
            translation_model_used: self.translator.model().to_string(),
            localized,
            translation_failures: failures,
        };
        info!(
            "✨ Article {} generated: {} ({} translation failures)",
            article.uid,
            article.headline,
            article.translation_failures.len()
        );
        Ok(article)
    }
}
