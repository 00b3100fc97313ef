/// Shared data types for the county happiness index service.
///
/// Everything the layers pass between each other lives here: the stored
/// record, the statistic vocabulary, and the query error taxonomy. Other
/// modules should reference these types rather than redefining their own
/// shapes.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One county record: a zip code and its happiness index.
///
/// Serializes as `{"zip": ..., "h_index": ...}`, the shape the lookup
/// endpoint returns directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Zip code. An opaque string key, never parsed numerically.
    pub zip: String,
    /// Happiness index score. Always finite; the seed loader rejects
    /// anything else before it reaches the store.
    pub h_index: f64,
}

/// What a bulk load into the record store did.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    /// Number of records this call inserted.
    pub inserted: usize,
    /// The first already-present zip that stopped the batch, if any.
    /// Everything after it was skipped.
    pub aborted_on: Option<String>,
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// The aggregate statistics the service can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticKind {
    Mean,
    Median,
    Stdev,
    Range,
}

impl StatisticKind {
    /// Every legal statistic, in the order error messages quote them.
    pub const ALL: [StatisticKind; 4] = [
        StatisticKind::Mean,
        StatisticKind::Median,
        StatisticKind::Stdev,
        StatisticKind::Range,
    ];

    /// The wire name of this statistic (also the JSON key of the result).
    pub fn as_str(&self) -> &'static str {
        match self {
            StatisticKind::Mean => "mean",
            StatisticKind::Median => "median",
            StatisticKind::Stdev => "stdev",
            StatisticKind::Range => "range",
        }
    }

    /// Parses a statistic name. Exact match only: no case folding, no
    /// trimming. Unknown names return `None`; there is deliberately no
    /// fallback statistic.
    pub fn parse(name: &str) -> Option<StatisticKind> {
        match name {
            "mean" => Some(StatisticKind::Mean),
            "median" => Some(StatisticKind::Median),
            "stdev" => Some(StatisticKind::Stdev),
            "range" => Some(StatisticKind::Range),
            _ => None,
        }
    }
}

/// A computed statistic, tagged with the kind that produced it.
///
/// Serializes as a single-entry object keyed by the statistic name, e.g.
/// `{"mean": 7.35}`. Built here as a typed value rather than an ad hoc map
/// at the transport layer.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticResult {
    pub statistic: StatisticKind,
    pub value: f64,
}

impl Serialize for StatisticResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.statistic.as_str(), &self.value)?;
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a query was rejected. Every variant is terminal for its request and
/// maps to a 400 response whose body carries the `Display` text verbatim,
/// echoing the offending input where there is one.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The requested statistic is not one of the legal four.
    InvalidStatistic,
    /// Fewer than two counties were supplied for an aggregate.
    InsufficientCounties,
    /// A requested zip is not in the dataset. Carries that exact zip.
    UnknownZip(String),
    /// Too few values for the requested statistic (stdev needs two).
    /// Unreachable through the HTTP surface, where the county-count check
    /// fires first, but the engine still enforces it for direct callers.
    InsufficientData(usize),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::InvalidStatistic => {
                let names: Vec<&str> = StatisticKind::ALL.iter().map(|k| k.as_str()).collect();
                write!(f, "Invalid statistic, choose one: [{}]", names.join(", "))
            }
            QueryError::InsufficientCounties => {
                write!(f, "Must include more than one county")
            }
            QueryError::UnknownZip(zip) => {
                write!(f, "{} is not included in the dataset", zip)
            }
            QueryError::InsufficientData(got) => {
                write!(f, "standard deviation requires at least two values, got {}", got)
            }
        }
    }
}

impl std::error::Error for QueryError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
