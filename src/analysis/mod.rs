/// Data analysis for the county happiness index service.
///
/// Submodules:
/// - `statistics` — mean, median, sample standard deviation, and range
///   over the index values of a validated zip selection.

pub mod statistics;
