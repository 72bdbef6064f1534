use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::locales::Locale;

const UID_LEN: usize = 12;

/// Random 12-character alphanumeric identifier. Collisions are not checked.
pub fn generate_uid() -> String {
    generate_uid_with(&mut rand::rng())
}

pub fn generate_uid_with<R: Rng>(rng: &mut R) -> String {
    (0..UID_LEN).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// Which part of an article a piece of text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    Headline,
    Detail,
    Content,
}

impl TextKind {
    pub const ALL: [TextKind; 3] = [TextKind::Headline, TextKind::Detail, TextKind::Content];
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TextKind::Headline => "headline",
            TextKind::Detail => "detail",
            TextKind::Content => "content",
        })
    }
}

/// Headline, detail and body in one locale. `None` marks a translation that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    pub title: Option<String>,
    pub detail: Option<String>,
    pub content: Option<String>,
}

impl LocalizedText {
    pub fn complete(title: String, detail: String, content: String) -> Self {
        Self {
            title: Some(title),
            detail: Some(detail),
            content: Some(content),
        }
    }

    pub fn get(&self, kind: TextKind) -> Option<&str> {
        match kind {
            TextKind::Headline => self.title.as_deref(),
            TextKind::Detail => self.detail.as_deref(),
            TextKind::Content => self.content.as_deref(),
        }
    }

    pub fn set(&mut self, kind: TextKind, text: Option<String>) {
        match kind {
            TextKind::Headline => self.title = text,
            TextKind::Detail => self.detail = text,
            TextKind::Content => self.content = text,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.detail.is_some() && self.content.is_some()
    }
}

/// Per-locale text of an article.
///
/// Serialized flat as `localized_title_<code>`, `localized_detail_<code>` and
/// `localized_content_<code>` for every supported locale, with `null` for
/// anything missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Localizations(BTreeMap<Locale, LocalizedText>);

impl Localizations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, locale: Locale) -> Option<&LocalizedText> {
        self.0.get(&locale)
    }

    pub fn insert(&mut self, locale: Locale, text: LocalizedText) {
        self.0.insert(locale, text);
    }
}

fn field_key(kind: TextKind, locale: Locale) -> String {
    let field = match kind {
        TextKind::Headline => "title",
        TextKind::Detail => "detail",
        TextKind::Content => "content",
    };
    format!("localized_{}_{}", field, locale.code())
}

fn parse_field_key(key: &str) -> Option<(TextKind, Locale)> {
    let rest = key.strip_prefix("localized_")?;
    let (field, code) = rest.rsplit_once('_')?;
    let kind = match field {
        "title" | "headline" => TextKind::Headline,
        "detail" => TextKind::Detail,
        "content" => TextKind::Content,
        _ => return None,
    };
    Some((kind, code.parse().ok()?))
}

impl Serialize for Localizations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Locale::ALL.len() * TextKind::ALL.len()))?;
        for locale in Locale::ALL {
            let text = self.0.get(&locale);
            for kind in TextKind::ALL {
                map.serialize_entry(&field_key(kind, locale), &text.and_then(|t| t.get(kind)))?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Localizations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Flattened, so this also receives unrelated keys (e.g. a database `_id`).
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut localized = BTreeMap::new();
        for (key, value) in raw {
            let Some((kind, locale)) = parse_field_key(&key) else {
                continue;
            };
            let text = match value {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            };
            localized
                .entry(locale)
                .or_insert_with(LocalizedText::default)
                .set(kind, text);
        }
        Ok(Self(localized))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationFailure {
    pub locale: Locale,
    pub kind: TextKind,
    pub reason: String,
}

/// A generated article. Built once every pipeline stage has run and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub uid: String,
    pub created_at: DateTime<Utc>,
    pub origin_locale: Locale,
    #[serde(rename = "style_or_source")]
    pub outlet: String,
    pub is_fake: bool,
    #[serde(rename = "fake_details")]
    pub detail: String,
    #[serde(rename = "title")]
    pub headline: String,
    pub content: String,
    pub headline_model_used: String,
    pub content_model_used: String,
    pub translation_model_used: String,
    #[serde(flatten)]
    pub localized: Localizations,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub translation_failures: Vec<TranslationFailure>,
}

impl Article {
    pub fn localized(&self, locale: Locale) -> Option<&LocalizedText> {
        self.localized.get(locale)
    }

    pub fn is_fully_translated(&self) -> bool {
        self.translation_failures.is_empty()
            && Locale::ALL
                .iter()
                .all(|l| self.localized.get(*l).is_some_and(LocalizedText::is_complete))
    }
}

/// One entry of the headline ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineEntry {
    #[serde(default)]
    pub uid: String,
    pub title: String,
    pub origin_locale: Locale,
    pub style: String,
    pub is_fake: bool,
    #[serde(default)]
    pub headline_generation_model_used: String,
    #[serde(default, alias = "headline_context")]
    pub detail: String,
}

impl From<&Article> for HeadlineEntry {
    fn from(article: &Article) -> Self {
        Self {
            uid: article.uid.clone(),
            title: article.headline.clone(),
            origin_locale: article.origin_locale,
            style: article.outlet.clone(),
            is_fake: article.is_fake,
            headline_generation_model_used: article.headline_model_used.clone(),
            detail: article.detail.clone(),
        }
    }
}
