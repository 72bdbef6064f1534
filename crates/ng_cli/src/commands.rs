use std::sync::Arc;
use std::time::Duration;

use ng_core::{generate_uid, Article, ArticleStore, ChatModel, Error, HeadlineEntry, Locale, Result};
use ng_inference::prelude::*;
use ng_storage::{HeadlineLedger, JsonFileStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};

use crate::cli::{ChoiceArgs, Commands, ModelArgs, StorageArgs};

pub async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate {
            count,
            choices,
            models,
            storage,
        } => generate_articles(count, &choices, &models, &storage).await.map(|_| ()),
        Commands::Headlines {
            count,
            choices,
            models,
            ledger,
        } => generate_headlines(count, &choices, &models, &ledger).await.map(|_| ()),
        Commands::BackfillIds { ledger } => {
            let mut ledger = HeadlineLedger::load(ledger).await?;
            let assigned = ledger.backfill_uids();
            ledger.save().await?;
            info!("🔑 {} of {} headlines given a uid", assigned, ledger.len());
            Ok(())
        }
        Commands::Outlets { locale } => {
            print!("{}", format_outlets(locale));
            Ok(())
        }
    }
}

fn format_outlets(locale: Option<Locale>) -> String {
    let locales = match locale {
        Some(locale) => vec![locale],
        None => Locale::ALL.to_vec(),
    };
    let mut out = String::new();
    for locale in locales {
        out.push_str(&format!("{} ({})\n", locale.code(), locale.name()));
        for outlet in locale.outlets() {
            out.push_str(&format!("  {}\n", outlet));
        }
    }
    out
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn request(choices: &ChoiceArgs, models: &ModelArgs) -> GenerationRequest {
    GenerationRequest::new(
        choices.locales.clone(),
        choices.fake_choices.clone(),
        models.content_models.clone(),
    )
}

fn chat_model(provider: Provider, models: &ModelArgs) -> Result<Arc<dyn ChatModel>> {
    let (api_key, base_url) = match provider {
        Provider::OpenAi => (models.openai_api_key.clone(), models.openai_base_url.clone()),
        Provider::GitHub => (models.github_token.clone(), models.github_base_url.clone()),
        Provider::Dummy => (None, None),
    };
    let config = Config {
        api_key,
        base_url,
        timeout: Duration::from_secs(models.timeout_secs),
    };
    let model = create_model(provider, &config)?;
    info!("🧠 Chat model initialized (using {})", model.name());
    Ok(model)
}

pub fn build_generator(models: &ModelArgs) -> Result<ArticleGenerator> {
    let writer = chat_model(models.provider, models)?;
    let translator = if models.translation_provider == models.provider {
        writer.clone()
    } else {
        chat_model(models.translation_provider, models)?
    };
    let default_content_model = models
        .content_models
        .first()
        .cloned()
        .ok_or_else(|| {
            Error::InvalidInput("at least one --content-model is required".to_string())
        })?;
    Ok(ArticleGenerator::new(
        HeadlineGenerator::new(ModelRoute::new(writer.clone(), models.headline_model.clone())),
        ContentGenerator::new(ModelRoute::new(writer, default_content_model)),
        Translator::new(ModelRoute::new(translator, models.translation_model.clone())),
    ))
}

async fn build_stores(storage: &StorageArgs) -> Result<Vec<Box<dyn ArticleStore>>> {
    let mut stores: Vec<Box<dyn ArticleStore>> = Vec::new();
    if let Some(path) = storage.output_path() {
        stores.push(Box::new(JsonFileStore::new(path)));
    }
    if let Some(mode) = storage.db {
        stores.push(connect_database(mode, storage.mongodb_uri.as_deref()).await?);
    }
    Ok(stores)
}

#[cfg(feature = "mongodb")]
async fn connect_database(
    mode: ng_storage::DatabaseMode,
    uri: Option<&str>,
) -> Result<Box<dyn ArticleStore>> {
    let uri = uri.ok_or_else(|| {
        Error::MissingConfig(format!(
            "MongoDB connection string is not set. Please set the {} environment variable",
            ng_storage::CONNECTION_STRING_ENV
        ))
    })?;
    let store = ng_storage::MongoStore::connect(uri, mode).await?;
    Ok(Box::new(store))
}

#[cfg(not(feature = "mongodb"))]
async fn connect_database(
    mode: ng_storage::DatabaseMode,
    _uri: Option<&str>,
) -> Result<Box<dyn ArticleStore>> {
    Err(Error::MissingConfig(format!(
        "database mode `{}` requested but newsgen was built without the `mongodb` feature",
        mode
    )))
}

/// Generate `count` articles, record their headlines and store them.
/// Returns the articles that were generated.
pub async fn generate_articles(
    count: usize,
    choices: &ChoiceArgs,
    models: &ModelArgs,
    storage: &StorageArgs,
) -> Result<Vec<Article>> {
    // Configuration problems surface here, before any model is called.
    let stores = build_stores(storage).await?;
    let generator = build_generator(models)?;
    let request = request(choices, models);
    let mut rng = rng(choices.seed);
    let mut ledger = HeadlineLedger::load(&storage.ledger).await?;

    let mut articles = Vec::with_capacity(count);
    for i in 0..count {
        info!("📝 Article {}/{}", i + 1, count);
        let selection = Selection::pick(&mut rng, &request)?;
        match generator.generate(&selection, &ledger.titles()).await {
            Ok(article) => {
                // The entry stays in memory so later prompts still avoid it.
                if let Err(e) = ledger.record(HeadlineEntry::from(&article)).await {
                    error!("❌ Failed to update headline ledger: {}", e);
                }
                articles.push(article);
            }
            Err(e) => error!("❌ Article {}/{} failed: {}", i + 1, count, e),
        }
    }

    for store in &stores {
        let stored = store.store_articles(&articles).await?;
        info!("💾 {} articles stored in {}", stored, store.describe());
    }
    info!(
        "✨ {} of {} articles generated, ledger now holds {} headlines",
        articles.len(),
        count,
        ledger.len()
    );
    Ok(articles)
}

/// Generate `count` headlines and append each to the ledger.
pub async fn generate_headlines(
    count: usize,
    choices: &ChoiceArgs,
    models: &ModelArgs,
    ledger_path: &std::path::Path,
) -> Result<usize> {
    let writer = chat_model(models.provider, models)?;
    let headlines = HeadlineGenerator::new(ModelRoute::new(writer, models.headline_model.clone()));
    let request = request(choices, models);
    let mut rng = rng(choices.seed);
    let mut ledger = HeadlineLedger::load(ledger_path).await?;

    let mut generated = 0;
    for i in 0..count {
        let selection = Selection::pick(&mut rng, &request)?;
        match headlines
            .generate(&selection.outlet, selection.locale, selection.is_fake, &ledger.titles())
            .await
        {
            Ok(headline) => {
                ledger
                    .record(HeadlineEntry {
                        uid: generate_uid(),
                        title: headline.headline,
                        origin_locale: selection.locale,
                        style: selection.outlet,
                        is_fake: selection.is_fake,
                        headline_generation_model_used: headlines.model().to_string(),
                        detail: headline.detail,
                    })
                    .await?;
                generated += 1;
            }
            Err(e) => error!("❌ Headline {}/{} failed: {}", i + 1, count, e),
        }
    }
    info!(
        "✨ {} headlines generated and stored in {}",
        generated,
        ledger.path().display()
    );
    Ok(generated)
}
