//! Budget file repository
//!
//! Owns the on-disk budget record. Every access reads or rewrites the whole
//! file; nothing is cached between calls.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetRecord, Money};

use super::file_io::{read_json, write_json_atomic};

/// The result of a lenient load
///
/// `record` is always usable. `issue` carries the recoverable error that
/// forced a fall back to the zero record, if any.
#[derive(Debug)]
pub struct Loaded {
    pub record: BudgetRecord,
    pub issue: Option<BudgetError>,
}

impl Loaded {
    /// True when the record was read without falling back to defaults
    pub fn is_clean(&self) -> bool {
        self.issue.is_none()
    }
}

/// Reads and writes the budget record at a fixed path
#[derive(Debug, Clone)]
pub struct BudgetStore {
    path: PathBuf,
}

impl BudgetStore {
    /// Create a store for the given budget file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the budget file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a budget file has been written yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the record, failing on corrupt or unreadable data
    ///
    /// A missing file is not an error and yields the zero record.
    pub fn try_load(&self) -> BudgetResult<BudgetRecord> {
        if !self.exists() {
            info!(path = %self.path.display(), "no budget file found, starting a new budget");
        }

        let record: BudgetRecord = read_json(&self.path)?;

        if !record.is_consistent() {
            warn!(
                path = %self.path.display(),
                balance = %record.balance(),
                "stored balance does not match income minus expenses"
            );
        }

        Ok(record)
    }

    /// Load the record, substituting zeros when the file can't be used
    pub fn load(&self) -> Loaded {
        match self.try_load() {
            Ok(record) => Loaded {
                record,
                issue: None,
            },
            Err(err) => {
                if err.is_corrupt_data() {
                    warn!("{}; resetting to zero", err);
                } else {
                    error!("{}; using an empty budget", err);
                }
                Loaded {
                    record: BudgetRecord::zero(),
                    issue: Some(err),
                }
            }
        }
    }

    /// Replace the stored record
    ///
    /// Records with a field outside `Money::MIN..=Money::MAX` are refused
    /// with [`BudgetError::Validation`] and the file is left alone, since
    /// they could not be read back unchanged.
    pub fn save(&self, record: &BudgetRecord) -> BudgetResult<()> {
        if !record.is_in_range() {
            return Err(BudgetError::Validation(format!(
                "budget totals must stay within {}",
                Money::MAX
            )));
        }

        write_json_atomic(&self.path, record).inspect_err(|err| error!("{}", err))?;
        info!(path = %self.path.display(), "budget saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, BudgetStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = BudgetStore::new(temp_dir.path().join("budget.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_load_missing_file_is_zero_and_clean() {
        let (_temp_dir, store) = create_test_store();

        let loaded = store.load();
        assert!(loaded.is_clean());
        assert_eq!(loaded.record, BudgetRecord::zero());
        assert!(!store.exists());
    }

    #[test]
    fn test_load_malformed_reports_corrupt_data() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "{\"income\": 10,").unwrap();

        let loaded = store.load();
        assert_eq!(loaded.record, BudgetRecord::zero());
        assert!(loaded.issue.as_ref().is_some_and(BudgetError::is_corrupt_data));
    }

    #[test]
    fn test_load_non_numeric_field_reports_corrupt_data() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), r#"{"income": "lots"}"#).unwrap();

        let err = store.try_load().unwrap_err();
        assert!(err.is_corrupt_data());
    }

    #[test]
    fn test_load_unreadable_reports_storage_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let store = BudgetStore::new(temp_dir.path());

        let loaded = store.load();
        assert_eq!(loaded.record, BudgetRecord::zero());
        assert!(loaded
            .issue
            .as_ref()
            .is_some_and(BudgetError::is_storage_unavailable));
    }

    #[test]
    fn test_load_fills_missing_fields() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), r#"{"expenses": 12.25, "extra": true}"#).unwrap();

        let record = store.try_load().unwrap();
        assert_eq!(record.income(), Money::zero());
        assert_eq!(record.expenses(), Money::from_cents(1225));
        assert_eq!(record.balance(), Money::zero());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_temp_dir, store) = create_test_store();
        let record = BudgetRecord::new(Money::from_cents(123456), Money::from_cents(789));

        store.save(&record).unwrap();
        assert!(store.exists());

        let loaded = store.load();
        assert!(loaded.is_clean());
        assert_eq!(loaded.record, record);
    }

    #[test]
    fn test_round_trip_at_the_limit() {
        let (_temp_dir, store) = create_test_store();
        let records = [
            BudgetRecord::new(Money::MAX, Money::zero()),
            BudgetRecord::new(Money::MAX, Money::MAX),
            BudgetRecord::new(Money::zero(), Money::MAX),
            BudgetRecord::new(Money::from_cents(987_654_321_098_765), Money::from_cents(1)),
        ];

        for record in records {
            store.save(&record).unwrap();
            let loaded = store.load();
            assert!(loaded.is_clean());
            assert_eq!(loaded.record, record);
        }
    }

    #[test]
    fn test_save_refuses_out_of_range_record() {
        let (_temp_dir, store) = create_test_store();
        let kept = BudgetRecord::new(Money::from_dollars(7), Money::zero());
        store.save(&kept).unwrap();

        let too_big = BudgetRecord::new(Money::from_cents(9_007_199_254_740_993), Money::zero());
        let err = store.save(&too_big).unwrap_err();
        assert!(matches!(err, BudgetError::Validation(_)));
        assert_eq!(store.try_load().unwrap(), kept);
    }

    #[test]
    fn test_load_rejects_amount_past_limit() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), r#"{"income": 92233720368547760}"#).unwrap();

        let loaded = store.load();
        assert!(loaded.issue.as_ref().is_some_and(BudgetError::is_corrupt_data));
    }

    #[test]
    fn test_save_overwrites_corrupt_file() {
        let (_temp_dir, store) = create_test_store();
        fs::write(store.path(), "###").unwrap();

        let record = BudgetRecord::new(Money::from_dollars(5), Money::zero());
        store.save(&record).unwrap();

        assert_eq!(store.try_load().unwrap(), record);
    }

    #[test]
    fn test_reads_files_written_as_plain_numbers() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            "{\n    \"income\": 100.0,\n    \"expenses\": 30,\n    \"balance\": 70.0\n}",
        )
        .unwrap();

        let record = store.try_load().unwrap();
        assert_eq!(
            record,
            BudgetRecord::new(Money::from_dollars(100), Money::from_dollars(30))
        );
    }
}
