/// hindex_service: read-only county happiness index statistics service.
///
/// # Module structure
///
/// ```text
/// hindex_service
/// ├── model       — shared data types (Record, StatisticKind, QueryError, …)
/// ├── config      — service configuration loader (service.toml + HINDEX_* env)
/// ├── store       — in-memory zip → happiness index record store
/// ├── ingest
/// │   ├── seed    — JSON seed file parsing (document-order entries)
/// │   └── fixtures (test only) — representative seed payloads
/// ├── analysis
/// │   └── statistics — mean / median / stdev / range over index values
/// ├── validate    — statistic name and zip selection validation
/// ├── query       — QueryHandler: the three read operations
/// └── endpoint    — HTTP query API served over a worker pool
/// ```

/// Public modules
pub mod analysis;
pub mod config;
pub mod endpoint;
pub mod ingest;
pub mod model;
pub mod query;
pub mod store;
pub mod validate;
