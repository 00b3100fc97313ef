/// Query orchestration: the service's three read operations.
///
/// `QueryHandler` wires the validator, the record store, and the statistic
/// engine together behind one small API. It owns no state of its own (the
/// dataset lives in the shared `RecordStore`), so cloning one into each
/// worker thread is cheap.

use std::sync::Arc;

use crate::analysis::statistics;
use crate::model::{QueryError, Record, StatisticResult};
use crate::store::RecordStore;
use crate::validate;

#[derive(Debug, Clone)]
pub struct QueryHandler {
    store: Arc<RecordStore>,
}

impl QueryHandler {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }

    /// Looks up a single county record by zip code.
    pub fn get_by_zip(&self, zip: &str) -> Result<Record, QueryError> {
        self.store
            .get(zip)
            .ok_or_else(|| QueryError::UnknownZip(zip.to_string()))
    }

    /// Total number of counties in the dataset.
    pub fn count_all(&self) -> usize {
        self.store.count()
    }

    /// Computes the named statistic over the zips carried by `params`.
    ///
    /// Validation runs in a fixed order (statistic name, county count,
    /// per-zip existence) and the first failure is the one reported. The
    /// index values are collected in the order the zips were supplied;
    /// duplicates contribute once per occurrence.
    pub fn compute_statistic(
        &self,
        name: &str,
        params: &[(String, String)],
    ) -> Result<StatisticResult, QueryError> {
        let kind = validate::validate_statistic_name(name)?;
        let zips = validate::validate_zip_selection(&self.store, params)?;

        let mut indices = Vec::with_capacity(zips.len());
        for zip in &zips {
            // The store is read-only while serving, so a just-validated zip
            // is still present; a miss here maps like any other unknown zip.
            let record = self
                .store
                .get(zip)
                .ok_or_else(|| QueryError::UnknownZip(zip.clone()))?;
            indices.push(record.h_index);
        }

        let value = statistics::calculate(kind, &indices)?;
        Ok(StatisticResult {
            statistic: kind,
            value,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
