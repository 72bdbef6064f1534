//! The headline ledger: every headline generated so far, kept so the next
//! prompt can ask the model not to repeat them.

use std::path::{Path, PathBuf};

use ng_core::{generate_uid, HeadlineEntry, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::json::{read_json, write_json};

#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerFile {
    #[serde(default)]
    headlines: Vec<HeadlineEntry>,
}

/// Append-only list of generated headlines, stored as `{"headlines": [...]}`.
#[derive(Debug)]
pub struct HeadlineLedger {
    path: PathBuf,
    entries: Vec<HeadlineEntry>,
}

impl HeadlineLedger {
    /// Load the ledger at `path`. A missing file is an empty ledger.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file: LedgerFile = read_json(&path).await?.unwrap_or_default();
        info!(
            "📚 Retrieved {} headlines from {}",
            file.headlines.len(),
            path.display()
        );
        Ok(Self {
            path,
            entries: file.headlines,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[HeadlineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Headline texts, oldest first.
    pub fn titles(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.title.clone()).collect()
    }

    /// Append `entry` and persist the whole ledger.
    pub async fn record(&mut self, entry: HeadlineEntry) -> Result<()> {
        self.entries.push(entry);
        self.save().await
    }

    /// Give every entry without a uid a fresh one. Returns how many changed.
    pub fn backfill_uids(&mut self) -> usize {
        let mut assigned = 0;
        for entry in self.entries.iter_mut().filter(|e| e.uid.trim().is_empty()) {
            entry.uid = generate_uid();
            assigned += 1;
        }
        assigned
    }

    pub async fn save(&self) -> Result<()> {
        #[derive(Serialize)]
        struct LedgerRef<'a> {
            headlines: &'a [HeadlineEntry],
        }
        write_json(&self.path, &LedgerRef { headlines: &self.entries }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ng_core::Locale;
    use tempfile::tempdir;

    fn entry(uid: &str, title: &str) -> HeadlineEntry {
        HeadlineEntry {
            uid: uid.to_string(),
            title: title.to_string(),
            origin_locale: Locale::Es,
            style: "El Mundo".to_string(),
            is_fake: false,
            headline_generation_model_used: "gpt-4o-mini".to_string(),
            detail: "Detail".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ledger_is_append_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("headlines.json");

        let mut ledger = HeadlineLedger::load(&path).await.unwrap();
        assert!(ledger.is_empty());
        ledger.record(entry("u1", "One")).await.unwrap();
        ledger.record(entry("u2", "Two")).await.unwrap();

        let mut reloaded = HeadlineLedger::load(&path).await.unwrap();
        assert_eq!(reloaded.titles(), vec!["One".to_string(), "Two".to_string()]);

        reloaded.record(entry("u3", "One")).await.unwrap();
        let reloaded = HeadlineLedger::load(&path).await.unwrap();
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.entries()[0].uid, "u1");
    }

    #[tokio::test]
    async fn test_backfill_only_touches_missing_uids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("headlines.json");
        std::fs::write(
            &path,
            r#"{"headlines": [
                {"title": "Legacy", "origin_locale": "en", "style": "NPR", "is_fake": true,
                 "headline_context": "ctx"},
                {"uid": "keepme", "title": "New", "origin_locale": "fr", "style": "Le Monde",
                 "is_fake": false}
            ]}"#,
        )
        .unwrap();

        let mut ledger = HeadlineLedger::load(&path).await.unwrap();
        assert_eq!(ledger.backfill_uids(), 1);
        ledger.save().await.unwrap();

        let ledger = HeadlineLedger::load(&path).await.unwrap();
        assert_eq!(ledger.entries()[0].uid.len(), 12);
        assert_eq!(ledger.entries()[0].detail, "ctx");
        assert_eq!(ledger.entries()[1].uid, "keepme");
    }
}
