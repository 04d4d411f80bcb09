//! Derived read-side views over the thread collection.
//!
//! Views are recomputed on demand from the store - nothing here caches or
//! invalidates. A linear scan is the design point for a session-sized
//! in-memory collection.

use crate::models::{Thread, ViewMode};
use crate::search::{parse_search_terms, thread_matches_terms};

/// Derive the visible subset of threads for a view mode and query.
///
/// Empty query: every thread whose archived flag matches the mode.
/// Non-empty: the mode filter AND all '+'-separated terms, each matched
/// case-insensitively against any searchable field. Source order is
/// preserved - no ranking.
pub fn visible_threads<'a>(threads: &'a [Thread], mode: ViewMode, query: &str) -> Vec<&'a Thread> {
    let terms = parse_search_terms(query);
    threads
        .iter()
        .filter(|t| mode.includes_archived(t.archived))
        .filter(|t| thread_matches_terms(t, &terms))
        .collect()
}
