/// Seed-file ingest: the one-shot JSON source that populates the record
/// store at startup.
///
/// The seed is a single JSON object mapping zip-code strings to numeric
/// happiness indices:
///
///   { "90210": 8.5, "10001": 6.2, "60601": 7.0 }
///
/// Entries come back in document order, so the store's
/// first-duplicate-aborts load behaves deterministically, and every index
/// is checked to be a finite number before it gets anywhere near the
/// store. There is no other data source; once this file is loaded the
/// dataset is fixed for the life of the process.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a seed could not be loaded. Every variant aborts startup; the
/// service has nothing to serve without its dataset.
#[derive(Debug)]
pub enum SeedError {
    /// The seed file could not be read.
    ReadFailed(String, std::io::Error),
    /// The contents are not a JSON object of zip → index entries.
    ParseFailed(String),
    /// An entry's value is not a finite number.
    InvalidIndex { zip: String, detail: String },
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::ReadFailed(path, e) => {
                write!(f, "Failed to read seed file {}: {}", path, e)
            }
            SeedError::ParseFailed(detail) => {
                write!(
                    f,
                    "Seed file is not a JSON object of zip/index pairs: {}",
                    detail
                )
            }
            SeedError::InvalidIndex { zip, detail } => {
                write!(f, "Seed entry \"{}\" has an invalid happiness index: {}", zip, detail)
            }
        }
    }
}

impl std::error::Error for SeedError {}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parses seed JSON into ordered (zip, index) pairs.
///
/// The top-level value must be an object. Values must be JSON numbers;
/// strings, booleans, nulls, and nested structures are rejected naming the
/// offending zip. Integer values load as floats.
pub fn parse_seed(json: &str) -> Result<Vec<(String, f64)>, SeedError> {
    let object: Map<String, Value> =
        serde_json::from_str(json).map_err(|e| SeedError::ParseFailed(e.to_string()))?;

    let mut entries = Vec::with_capacity(object.len());
    for (zip, value) in object {
        let index = match value.as_f64() {
            Some(index) => index,
            None => {
                return Err(SeedError::InvalidIndex {
                    zip,
                    detail: format!("expected a number, got {}", value),
                });
            }
        };
        if !index.is_finite() {
            return Err(SeedError::InvalidIndex {
                zip,
                detail: format!("{} is not a finite number", index),
            });
        }
        entries.push((zip, index));
    }
    Ok(entries)
}

/// Reads and parses the seed file at `path`.
pub fn load_seed_file(path: &Path) -> Result<Vec<(String, f64)>, SeedError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| SeedError::ReadFailed(path.display().to_string(), e))?;
    parse_seed(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
