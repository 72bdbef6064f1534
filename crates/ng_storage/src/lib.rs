pub mod backends;
mod json;
pub mod ledger;
pub mod mode;

pub use backends::*;
pub use ledger::HeadlineLedger;
pub use mode::DatabaseMode;

/// Collection every database-backed store writes to.
pub const ARTICLES_COLLECTION: &str = "articles";

/// Environment variable holding the document-store connection string.
pub const CONNECTION_STRING_ENV: &str = "JUDGE_GPT_MONGODB_CONNECTION_STRING";
