/// Test fixtures: representative seed-file payloads.
///
/// These mirror the real seed file shape (a single JSON object mapping
/// zip-code strings to numeric happiness indices) plus the malformed
/// variants the parser must reject. Kept small; three counties are enough
/// to exercise every statistic.
///
/// Seed shape:
///   { "<zip>": <index>, ... }
///     keys   — zip codes as strings, unique within the document
///     values — happiness indices as JSON numbers (integers load as floats)

/// The three-county reference dataset used across the test suite.
/// mean(all) = 7.2333…, median = 7.0, stdev = 1.17, range = 2.3.
#[cfg(test)]
pub(crate) fn fixture_three_county_seed() -> &'static str {
    r#"{ "90210": 8.5, "10001": 6.2, "60601": 7.0 }"#
}

/// Ten midwest counties with keys deliberately out of sorted order, to
/// exercise document-order preservation in the parser.
#[cfg(test)]
pub(crate) fn fixture_midwest_seed() -> &'static str {
    r#"{
      "60601": 7.0,
      "53202": 6.85,
      "46204": 6.4,
      "55401": 7.9,
      "63101": 5.95,
      "64106": 6.3,
      "43215": 6.75,
      "48226": 5.4,
      "50309": 7.15,
      "68102": 7.45
    }"#
}

/// Indices written as JSON integers; numbers without a decimal point must
/// load as floats, not be rejected.
#[cfg(test)]
pub(crate) fn fixture_integer_indices_seed() -> &'static str {
    r#"{ "12345": 7, "23456": 5 }"#
}

/// Second entry's index is a string. The parser must reject the seed and
/// name zip 10001.
#[cfg(test)]
pub(crate) fn fixture_non_numeric_seed() -> &'static str {
    r#"{ "90210": 8.5, "10001": "very happy" }"#
}

/// Top-level array instead of an object: the right data in the wrong
/// envelope.
#[cfg(test)]
pub(crate) fn fixture_array_seed() -> &'static str {
    r#"[ { "zip": "90210", "h_index": 8.5 } ]"#
}

/// Truncated mid-document, as a partially written file would be.
#[cfg(test)]
pub(crate) fn fixture_malformed_seed() -> &'static str {
    r#"{ "90210": 8.5,"#
}

/// Empty object. Legal; produces an empty dataset.
#[cfg(test)]
pub(crate) fn fixture_empty_seed() -> &'static str {
    "{}"
}
