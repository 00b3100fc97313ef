/// Aggregate statistics over county happiness indices.
///
/// Pure functions over a slice of index values, the numbers collected for
/// an already-validated zip selection. Input order never affects a result.
///
/// Precision follows the published API behavior: `mean` and `median` return
/// full floating precision, `stdev` and `range` round to two decimal
/// places.

use crate::model::{QueryError, StatisticKind};

// ---------------------------------------------------------------------------
// Individual statistics
// ---------------------------------------------------------------------------

/// Arithmetic mean: sum over count, full precision.
///
/// Callers supply at least one value; the request validator enforces a
/// stricter two-county minimum upstream.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard median: the middle of the sorted values, or the average of the
/// two middle values for an even count. Full precision.
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation (n − 1 denominator), rounded to two decimal
/// places. A single observation has no spread, so fewer than two values is
/// an error rather than a zero.
pub fn stdev(values: &[f64]) -> Result<f64, QueryError> {
    if values.len() < 2 {
        return Err(QueryError::InsufficientData(values.len()));
    }

    let avg = mean(values);
    let variance =
        values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Ok(round2(variance.sqrt()))
}

/// Range: maximum minus minimum, rounded to two decimal places. Zero for a
/// single value, never negative.
pub fn range(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    round2(max - min)
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Computes the requested statistic over `values`.
///
/// The match is exhaustive over `StatisticKind` with no fallback arm, so an
/// unrecognized name can never silently become some other computation;
/// unknown names are rejected as a parse failure long before this point.
pub fn calculate(kind: StatisticKind, values: &[f64]) -> Result<f64, QueryError> {
    match kind {
        StatisticKind::Mean => Ok(mean(values)),
        StatisticKind::Median => Ok(median(values)),
        StatisticKind::Stdev => stdev(values),
        StatisticKind::Range => Ok(range(values)),
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
