//! Immutable batch store with hash indices by batch id and by timestamp.
//!
//! The store owns the records; both indices map a key to a position in the
//! record vector. Nothing mutates after construction, so the store is shared
//! across request handlers behind a plain `Arc`.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use tracing::info;

use smelter_core::error::{Result, SmelterError};
use smelter_core::types::{BatchRecord, LookupKey};

use crate::seed::seed_records;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Read-only collection of batch records.
#[derive(Debug)]
pub struct BatchStore {
    records: Vec<BatchRecord>,
    by_batch_id: HashMap<String, usize>,
    by_timestamp: HashMap<String, usize>,
}

impl BatchStore {
    /// Build the store and both indices from a record list.
    ///
    /// Rejects malformed keys, negative or non-finite composition values,
    /// and duplicate batch ids or timestamps.
    pub fn new(records: Vec<BatchRecord>) -> Result<Self> {
        let mut by_batch_id = HashMap::with_capacity(records.len());
        let mut by_timestamp = HashMap::with_capacity(records.len());

        for (pos, record) in records.iter().enumerate() {
            validate_record(record)?;

            if by_batch_id.insert(record.batch_id.clone(), pos).is_some() {
                return Err(SmelterError::Dataset(format!(
                    "duplicate batch_id {}",
                    record.batch_id
                )));
            }
            if by_timestamp.insert(record.timestamp.clone(), pos).is_some() {
                return Err(SmelterError::Dataset(format!(
                    "duplicate timestamp {}",
                    record.timestamp
                )));
            }
        }

        info!(batches = records.len(), "Batch store built");

        Ok(Self {
            records,
            by_batch_id,
            by_timestamp,
        })
    }

    /// The store populated with the fixed seed dataset.
    pub fn seeded() -> Result<Self> {
        Self::new(seed_records())
    }

    /// Exact-match lookup by six-digit batch id.
    pub fn find_by_batch_id(&self, batch_id: &str) -> Option<&BatchRecord> {
        self.by_batch_id
            .get(batch_id)
            .map(|&pos| &self.records[pos])
    }

    /// Exact-match lookup by `YYYY-MM-DDTHH:MM:SSZ` timestamp.
    pub fn find_by_timestamp(&self, timestamp: &str) -> Option<&BatchRecord> {
        self.by_timestamp
            .get(timestamp)
            .map(|&pos| &self.records[pos])
    }

    /// Resolve a key through the index matching its kind.
    pub fn find(&self, key: &LookupKey) -> Option<&BatchRecord> {
        match key {
            LookupKey::BatchId(id) => self.find_by_batch_id(id),
            LookupKey::Timestamp(ts) => self.find_by_timestamp(ts),
        }
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[BatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate_record(record: &BatchRecord) -> Result<()> {
    let id = &record.batch_id;
    if id.len() != 6 || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SmelterError::Dataset(format!(
            "batch_id '{}' is not a six-digit identifier",
            id
        )));
    }

    // Length check pins the exact shape; chrono checks the calendar.
    let ts = &record.timestamp;
    if ts.len() != 20 || NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).is_err() {
        return Err(SmelterError::Dataset(format!(
            "batch {} has invalid timestamp '{}'",
            id, ts
        )));
    }

    for (label, value) in record.composition.entries() {
        if !value.is_finite() || value < 0.0 {
            return Err(SmelterError::Dataset(format!(
                "batch {} has invalid {} content {}",
                id, label, value
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> BatchStore {
        BatchStore::seeded().unwrap()
    }

    fn record(batch_id: &str, timestamp: &str) -> BatchRecord {
        let mut r = seed_records().remove(0);
        r.batch_id = batch_id.to_string();
        r.timestamp = timestamp.to_string();
        r
    }

    #[test]
    fn test_seeded_store_is_valid() {
        let store = store();
        assert_eq!(store.len(), 10);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_find_by_batch_id() {
        let store = store();
        let batch = store.find_by_batch_id("700001").unwrap();
        assert_eq!(batch.uts, 10.3);
        assert_eq!(batch.timestamp, "2024-09-02T00:10:00Z");
    }

    #[test]
    fn test_find_by_timestamp() {
        let store = store();
        let batch = store.find_by_timestamp("2024-09-02T01:15:00Z").unwrap();
        assert_eq!(batch.batch_id, "700002");
        assert_eq!(batch.composition.al, 99.705);
    }

    #[test]
    fn test_not_found_is_none() {
        let store = store();
        assert!(store.find_by_batch_id("999999").is_none());
        assert!(store.find_by_timestamp("2030-01-01T00:00:00Z").is_none());
        // Keys are exact-match only.
        assert!(store.find_by_batch_id("70000").is_none());
        assert!(store.find_by_timestamp("2024-09-02T01:15:00").is_none());
    }

    #[test]
    fn test_every_record_reachable_by_both_keys() {
        let store = store();
        for record in store.records() {
            let by_id = store.find_by_batch_id(&record.batch_id).unwrap();
            let by_ts = store.find_by_timestamp(&record.timestamp).unwrap();
            assert_eq!(by_id, record);
            assert_eq!(by_ts, record);
        }
    }

    #[test]
    fn test_find_dispatches_on_key_kind() {
        let store = store();
        let by_id = store.find(&LookupKey::BatchId("800008".to_string())).unwrap();
        let by_ts = store
            .find(&LookupKey::Timestamp("2024-09-02T07:26:00Z".to_string()))
            .unwrap();
        assert_eq!(by_id, by_ts);
    }

    #[test]
    fn test_records_keep_insertion_order() {
        let store = store();
        let ids: Vec<&str> = store.records().iter().map(|r| r.batch_id.as_str()).collect();
        assert_eq!(ids.first(), Some(&"700001"));
        assert_eq!(ids.last(), Some(&"800010"));
    }

    #[test]
    fn test_empty_store() {
        let store = BatchStore::new(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.find_by_batch_id("700001").is_none());
    }

    #[test]
    fn test_rejects_duplicate_batch_id() {
        let records = vec![
            record("700001", "2024-09-02T00:10:00Z"),
            record("700001", "2024-09-02T00:11:00Z"),
        ];
        let err = BatchStore::new(records).unwrap_err();
        assert!(matches!(err, SmelterError::Dataset(_)));
        assert!(err.to_string().contains("duplicate batch_id 700001"));
    }

    #[test]
    fn test_rejects_duplicate_timestamp() {
        let records = vec![
            record("700001", "2024-09-02T00:10:00Z"),
            record("700002", "2024-09-02T00:10:00Z"),
        ];
        let err = BatchStore::new(records).unwrap_err();
        assert!(err.to_string().contains("duplicate timestamp"));
    }

    #[test]
    fn test_rejects_malformed_batch_id() {
        for bad in ["70001", "7000011", "70000a", ""] {
            let err = BatchStore::new(vec![record(bad, "2024-09-02T00:10:00Z")]).unwrap_err();
            assert!(matches!(err, SmelterError::Dataset(_)), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_rejects_malformed_timestamp() {
        for bad in [
            "2024-09-02 00:10:00Z",
            "2024-09-02T00:10:00",
            "2024-09-02T00:10:00+00:00",
            "2024-13-02T00:10:00Z",
            "2024-02-30T00:10:00Z",
        ] {
            let err = BatchStore::new(vec![record("700001", bad)]).unwrap_err();
            assert!(matches!(err, SmelterError::Dataset(_)), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_rejects_negative_composition() {
        let mut r = record("700001", "2024-09-02T00:10:00Z");
        r.composition.fe = -0.1;
        let err = BatchStore::new(vec![r]).unwrap_err();
        assert!(err.to_string().contains("Fe"));
    }

    #[test]
    fn test_rejects_nan_composition() {
        let mut r = record("700001", "2024-09-02T00:10:00Z");
        r.composition.al = f64::NAN;
        assert!(BatchStore::new(vec![r]).is_err());
    }
}
