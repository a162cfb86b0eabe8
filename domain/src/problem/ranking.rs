//! Candidate matching and ordering for catalog searches.
//!
//! An entry matches when the case-folded query is a substring of its
//! case-folded title or of its slug, or when an all-digit query equals its
//! numeric id. Matches are ordered by `(tie_break_rank, id)`: rank 0 for an
//! entry whose id or slug equals the query verbatim, rank 1 otherwise.

use super::entities::{Candidate, CatalogEntry};
use super::query::is_numeric_id;
use crate::core::error::DomainError;

/// Whether a raw catalog entry is a hit for `query`.
pub fn entry_matches(query: &str, entry: &CatalogEntry) -> bool {
    let folded = query.to_lowercase();
    if entry.title.to_lowercase().contains(&folded) || entry.slug.contains(&folded) {
        return true;
    }
    is_numeric_id(query)
        && query
            .parse::<u64>()
            .is_ok_and(|n| n == u64::from(entry.id))
}

/// 0 for an exact textual hit on id or slug, 1 for everything else.
pub fn tie_break_rank(query: &str, candidate: &Candidate) -> u8 {
    if candidate.id.to_string() == query || candidate.slug == query {
        0
    } else {
        1
    }
}

/// Filter `entries` down to matches for `query` and sort them best-first.
///
/// Only matching entries are validated; a matching entry with an
/// out-of-range difficulty level fails the whole search.
pub fn rank_candidates(
    query: &str,
    entries: &[CatalogEntry],
) -> Result<Vec<Candidate>, DomainError> {
    let mut candidates = entries
        .iter()
        .filter(|entry| entry_matches(query, entry))
        .map(Candidate::try_from_entry)
        .collect::<Result<Vec<_>, _>>()?;

    candidates.sort_by_key(|c| (tie_break_rank(query, c), c.id));
    Ok(candidates)
}
