use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ng_core::Locale;
use ng_inference::Provider;
use ng_storage::DatabaseMode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate, translate and store synthetic news articles", long_about = None)]
pub struct Cli {
    /// Log prompts and raw model responses
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate full articles, translate them and store them
    Generate {
        /// Number of articles to generate
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
        #[command(flatten)]
        choices: ChoiceArgs,
        #[command(flatten)]
        models: ModelArgs,
        #[command(flatten)]
        storage: StorageArgs,
    },
    /// Generate headlines only and append them to the ledger
    Headlines {
        #[arg(long, short = 'n', default_value_t = 10)]
        count: usize,
        #[command(flatten)]
        choices: ChoiceArgs,
        #[command(flatten)]
        models: ModelArgs,
        #[arg(long, default_value = "generated_headlines.json")]
        ledger: PathBuf,
    },
    /// Assign a uid to every ledger entry that lacks one
    BackfillIds {
        #[arg(long, default_value = "generated_headlines.json")]
        ledger: PathBuf,
    },
    /// List supported locales and their news outlets
    Outlets {
        #[arg(long)]
        locale: Option<Locale>,
    },
}

/// Candidates each article is picked from.
#[derive(Args, Debug, Clone)]
pub struct ChoiceArgs {
    /// Origin locales to pick from (repeatable)
    #[arg(long = "locale", value_name = "LOCALE", default_values_t = Locale::ALL.to_vec())]
    pub locales: Vec<Locale>,
    /// Authenticity flags to pick from (repeatable): true for fake, false for real
    #[arg(long = "fake", value_name = "BOOL", default_values_t = vec![true, false])]
    pub fake_choices: Vec<bool>,
    /// Seed for locale, outlet and flag selection
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Provider for headline and content generation: openai, github or dummy
    #[arg(long, default_value = "openai")]
    pub provider: Provider,
    /// Provider for translations: openai, github or dummy
    #[arg(long, default_value = "github")]
    pub translation_provider: Provider,
    #[arg(long, env = "JUDGE_GPT_OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,
    #[arg(long)]
    pub openai_base_url: Option<String>,
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,
    #[arg(long)]
    pub github_base_url: Option<String>,
    #[arg(long, default_value = "gpt-4o-mini")]
    pub headline_model: String,
    /// Content models to pick from (repeatable)
    #[arg(long = "content-model", default_values_t = vec!["gpt-4o".to_string()])]
    pub content_models: Vec<String>,
    #[arg(long, default_value = "gpt-4o-mini")]
    pub translation_model: String,
    /// HTTP timeout for each model call
    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,
}

#[derive(Args, Debug, Clone)]
pub struct StorageArgs {
    /// Headline ledger used to avoid repeats
    #[arg(long, default_value = "generated_headlines.json")]
    pub ledger: PathBuf,
    /// JSON file to append articles to. Defaults to generated_articles.json when --db is not given
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Also insert articles into this database: dev, prod or testing
    #[arg(long)]
    pub db: Option<DatabaseMode>,
    #[arg(long, env = "JUDGE_GPT_MONGODB_CONNECTION_STRING", hide_env_values = true)]
    pub mongodb_uri: Option<String>,
}

pub const DEFAULT_OUTPUT: &str = "generated_articles.json";

impl StorageArgs {
    /// File store path, if articles should go to a file at all.
    pub fn output_path(&self) -> Option<PathBuf> {
        match (&self.output, &self.db) {
            (Some(path), _) => Some(path.clone()),
            (None, None) => Some(PathBuf::from(DEFAULT_OUTPUT)),
            (None, Some(_)) => None,
        }
    }
}
