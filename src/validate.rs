/// Request validation for the statistics surface.
///
/// Turns raw query input (the statistic name from the path and the ordered
/// query parameters) into a validated computation request, or the single
/// `QueryError` explaining the rejection. Checks run in a fixed order:
/// statistic name first, then county count, then per-zip existence. When a
/// request has several problems, only the first check to fail is reported.

use crate::model::{QueryError, StatisticKind};
use crate::store::RecordStore;

/// Validates a statistic name against the legal set.
pub fn validate_statistic_name(name: &str) -> Result<StatisticKind, QueryError> {
    StatisticKind::parse(name).ok_or(QueryError::InvalidStatistic)
}

/// Validates the county selection carried by the query parameters.
///
/// Parameter names are irrelevant; the values are the zip codes. The
/// selection must name at least two counties, and every zip must exist in
/// the store. Existence is checked front to back and the first unknown zip
/// fails the whole request; later parameters are never inspected. On
/// success the zips come back exactly as supplied: same order, duplicates
/// kept.
pub fn validate_zip_selection(
    store: &RecordStore,
    params: &[(String, String)],
) -> Result<Vec<String>, QueryError> {
    if params.len() < 2 {
        return Err(QueryError::InsufficientCounties);
    }

    let mut zips = Vec::with_capacity(params.len());
    for (_, zip) in params {
        if store.get(zip).is_none() {
            return Err(QueryError::UnknownZip(zip.clone()));
        }
        zips.push(zip.clone());
    }
    Ok(zips)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
