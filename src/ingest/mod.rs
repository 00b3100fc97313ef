/// Data ingest for the county happiness index service.
///
/// Submodules:
/// - `seed` — JSON seed file parsing: the one-shot source that populates
///   the record store before the endpoint starts serving.
/// - `fixtures` (test only) — representative seed payloads.

pub mod fixtures;
pub mod seed;
