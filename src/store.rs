/// In-memory record store: the zip code → happiness index dataset.
///
/// Populated once at startup from the seed file and read-only for the rest
/// of the process. The serving layer shares a single store through an
/// `Arc`, so lookups never take a lock. Loading happens before the first
/// request is accepted; there is no mutation path after that.

use std::collections::HashMap;

use crate::model::{LoadOutcome, Record};

/// Owns the full set of county records. Zip codes are unique keys; storage
/// order is irrelevant once loading is done.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: HashMap<String, f64>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Bulk-loads `entries` in order.
    ///
    /// Walks the batch front to back. The first zip that already exists in
    /// the store stops the load: nothing after it is inserted, everything
    /// before it stays, and the outcome records which zip aborted the
    /// batch. Loading the same dataset twice therefore leaves the store
    /// unchanged on the second call. Existing records are never
    /// overwritten.
    pub fn load(&mut self, entries: &[(String, f64)]) -> LoadOutcome {
        let mut inserted = 0;
        for (zip, index) in entries {
            if self.records.contains_key(zip) {
                return LoadOutcome {
                    inserted,
                    aborted_on: Some(zip.clone()),
                };
            }
            self.records.insert(zip.clone(), *index);
            inserted += 1;
        }
        LoadOutcome {
            inserted,
            aborted_on: None,
        }
    }

    /// Exact-match lookup by zip code. Keys are compared byte for byte, so
    /// `"90210 "` and `"90210"` are different keys.
    pub fn get(&self, zip: &str) -> Option<Record> {
        self.records.get(zip).map(|&h_index| Record {
            zip: zip.to_string(),
            h_index,
        })
    }

    /// Number of stored records.
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
