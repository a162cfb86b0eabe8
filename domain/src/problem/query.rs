//! Helpers for interpreting a free-form problem query.

/// `true` when the query is non-empty and made only of ASCII decimal digits.
pub fn is_numeric_id(query: &str) -> bool {
    !query.is_empty() && query.bytes().all(|b| b.is_ascii_digit())
}

/// Derive a catalog slug from a title-like query.
///
/// Lower-cases the query and replaces each run of whitespace with a single
/// hyphen: `"Two  Sum"` becomes `"two-sum"`.
pub fn to_slug(query: &str) -> String {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
