//! The immutable signature catalog.
//!
//! A [`SignatureStore`] is built once at startup and never mutated. It is
//! `Send + Sync` with no interior mutability, so handlers share it behind an
//! `Arc` without locking.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::StoreError;
use crate::record::SignatureRecord;
use crate::tier::Tier;

/// Dataset compiled into the binary.
pub const BUNDLED_DATASET: &str = include_str!("../data/signatures.json");

#[derive(Debug, Clone)]
pub struct SignatureStore {
    records: Vec<SignatureRecord>,
}

impl SignatureStore {
    /// Validate and wrap a list of records.
    ///
    /// Rejects an empty list and any record whose text is blank.
    pub fn from_records(records: Vec<SignatureRecord>) -> Result<Self, StoreError> {
        if records.is_empty() {
            return Err(StoreError::Empty);
        }
        if let Some(index) = records.iter().position(|r| r.text.trim().is_empty()) {
            return Err(StoreError::EmptyText { index });
        }
        Ok(Self { records })
    }

    /// Parse a JSON array of `{"text": ..., "tier": ...}` objects.
    ///
    /// Tier names in the dataset must already be lowercase; anything else is
    /// treated as malformed.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let records: Vec<SignatureRecord> = serde_json::from_str(json)?;
        debug!(records = records.len(), "parsed signature dataset");
        Self::from_records(records)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&json)?;
        info!(path = %path.display(), count = store.count(), "loaded signature dataset from file");
        Ok(store)
    }

    /// Load the dataset shipped inside the binary.
    pub fn bundled() -> Result<Self, StoreError> {
        Self::from_json(BUNDLED_DATASET)
    }

    pub fn all(&self) -> &[SignatureRecord] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn count_by_tier(&self, tier: Tier) -> usize {
        self.records.iter().filter(|r| r.tier == tier).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_dataset_covers_every_tier() {
        let store = SignatureStore::bundled().expect("bundled dataset must load");
        assert!(store.count() > 0);
        for tier in Tier::ALL {
            assert!(store.count_by_tier(tier) > 0, "no records for {tier}");
        }
        let total: usize = Tier::ALL.iter().map(|t| store.count_by_tier(*t)).sum();
        assert_eq!(total, store.count());
    }

    #[test]
    fn bundled_dataset_keeps_multiline_text() {
        let store = SignatureStore::bundled().unwrap();
        assert!(store.all().iter().any(|r| r.text.contains('\n')));
    }

    #[test]
    fn from_json_preserves_order() {
        let store = SignatureStore::from_json(
            r#"[
                {"text": "first", "tier": "unhinged"},
                {"text": "second", "tier": "unbothered"}
            ]"#,
        )
        .unwrap();
        assert_eq!(store.count(), 2);
        assert_eq!(store.all()[0].text, "first");
        assert_eq!(store.all()[1].tier, Tier::Unbothered);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(
            SignatureStore::from_json("[]"),
            Err(StoreError::Empty)
        ));
    }

    #[test]
    fn malformed_dataset_is_rejected() {
        assert!(matches!(
            SignatureStore::from_json("{\"text\": \"not a list\"}"),
            Err(StoreError::Malformed(_))
        ));
        assert!(matches!(
            SignatureStore::from_json("[{\"text\": \"x\", \"tier\": \"feral\"}]"),
            Err(StoreError::Malformed(_))
        ));
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = SignatureStore::from_records(vec![
            SignatureRecord::new("ok", Tier::Unhinged),
            SignatureRecord::new("  \n ", Tier::Unleashed),
        ])
        .unwrap_err();
        assert!(matches!(err, StoreError::EmptyText { index: 1 }));
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"text": "hello", "tier": "unleashed"}}]"#).unwrap();

        let store = SignatureStore::from_path(file.path()).unwrap();
        assert_eq!(store.count(), 1);
        assert_eq!(store.count_by_tier(Tier::Unleashed), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SignatureStore::from_path(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
