//! Search utilities for thread filtering.
//!
//! Provides consistent search semantics for text matching, including:
//! - Multi-term AND queries with '+' operator
//! - ASCII case-insensitive matching
//! - OR matching across every searchable field of a thread

use crate::models::Thread;

/// Parse a search query into individual search terms.
///
/// The '+' operator splits the query into multiple terms that must ALL match
/// (AND semantics at the thread level). Each term is trimmed and lowercased.
///
/// # Examples
/// - "sarah" -> ["sarah"]
/// - "sarah+hire" -> ["sarah", "hire"]
/// - "  sarah + hire  " -> ["sarah", "hire"]
/// - "sarah++hire" -> ["sarah", "hire"] (empty terms ignored)
/// - "" -> []
pub fn parse_search_terms(query: &str) -> Vec<String> {
    query
        .split('+')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Check if text contains a search term (ASCII case-insensitive)
pub fn text_contains_term(text: &str, term: &str) -> bool {
    let text_chars: Vec<char> = text.chars().collect();
    let term_chars: Vec<char> = term.chars().collect();

    if term_chars.is_empty() {
        return true;
    }

    if text_chars.len() < term_chars.len() {
        return false;
    }

    for start_idx in 0..=(text_chars.len() - term_chars.len()) {
        let matches = term_chars.iter().enumerate().all(|(i, tc)| {
            text_chars
                .get(start_idx + i)
                .is_some_and(|c| c.eq_ignore_ascii_case(tc))
        });
        if matches {
            return true;
        }
    }
    false
}

/// Every field of a thread the search runs against.
///
/// Matching is OR across these fields for a single term; undefined optional
/// fields simply don't participate.
fn searchable_fields(thread: &Thread) -> Vec<&str> {
    let mut fields = vec![
        thread.participant.name.as_str(),
        thread.participant.handle.as_str(),
        thread.participant.city.as_str(),
        thread.participant.state.as_str(),
        thread.preview.as_str(),
        thread.intent.label(),
        thread.state.label(),
    ];
    for (_, value) in thread.fields.defined() {
        fields.push(value);
    }
    if let Some(ref isni) = thread.participant.verification.isni {
        fields.push(isni.as_str());
    }
    if let Some(ref orcid) = thread.participant.verification.orcid {
        fields.push(orcid.as_str());
    }
    fields
}

/// Check if a single term matches any searchable field of the thread
pub fn thread_matches_term(thread: &Thread, term: &str) -> bool {
    searchable_fields(thread)
        .iter()
        .any(|field| text_contains_term(field, term))
}

/// Check if a thread matches ALL search terms.
/// Returns true for an empty term list.
pub fn thread_matches_terms(thread: &Thread, terms: &[String]) -> bool {
    terms.iter().all(|term| thread_matches_term(thread, term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Intent, Participant, Thread, ThreadFields, ThreadState, Verification};

    fn sample_thread() -> Thread {
        Thread {
            id: "t1".to_string(),
            participant: Participant {
                name: "Sarah Chen".to_string(),
                handle: "sarahwrites".to_string(),
                city: "Portland".to_string(),
                state: "OR".to_string(),
                verification: Verification {
                    domain_verified: true,
                    isni: Some("0000 0004 1936 8753".to_string()),
                    orcid: None,
                },
            },
            intent: Intent::Hire,
            state: ThreadState::Requested,
            preview: "Looking for a ghostwriter for a founder memoir".to_string(),
            timestamp: "2h ago".to_string(),
            unread: true,
            archived: false,
            fields: ThreadFields {
                budget: Some("$5k-$10k".to_string()),
                timeline: Some("3 months".to_string()),
                role: None,
                service: None,
            },
        }
    }

    #[test]
    fn test_parse_search_terms() {
        assert_eq!(parse_search_terms("sarah"), vec!["sarah"]);
        assert_eq!(parse_search_terms("sarah+hire"), vec!["sarah", "hire"]);
        assert_eq!(parse_search_terms("  sarah + hire  "), vec!["sarah", "hire"]);
        assert_eq!(parse_search_terms("sarah++hire"), vec!["sarah", "hire"]);
        assert!(parse_search_terms("").is_empty());
        assert_eq!(parse_search_terms("SARAH"), vec!["sarah"]);
    }

    #[test]
    fn test_text_contains_term() {
        assert!(text_contains_term("Sarah Chen", "sarah"));
        assert!(text_contains_term("Sarah Chen", "CHEN"));
        assert!(text_contains_term("Sarah Chen", "h Ch"));
        assert!(!text_contains_term("Sarah Chen", "xyz"));
        assert!(text_contains_term("Sarah Chen", "")); // Empty term matches all
        assert!(!text_contains_term("Hi", "Hello")); // Term longer than text
    }

    #[test]
    fn test_thread_matches_name_case_insensitive() {
        let thread = sample_thread();
        assert!(thread_matches_term(&thread, "sarah"));
        assert!(thread_matches_term(&thread, "SARAH"));
    }

    #[test]
    fn test_thread_matches_optional_fields() {
        let thread = sample_thread();
        // Budget field value
        assert!(thread_matches_term(&thread, "$5k-$10k"));
        // ISNI identifier
        assert!(thread_matches_term(&thread, "1936 8753"));
        // Undefined role/orcid fields never match
        assert!(!thread_matches_term(&thread, "ghostwriter-role"));
    }

    #[test]
    fn test_thread_matches_intent_and_state_labels() {
        let thread = sample_thread();
        assert!(thread_matches_term(&thread, "hire"));
        assert!(thread_matches_term(&thread, "requested"));
    }

    #[test]
    fn test_thread_matches_all_terms() {
        let thread = sample_thread();
        let both = vec!["sarah".to_string(), "memoir".to_string()];
        assert!(thread_matches_terms(&thread, &both));

        let miss = vec!["sarah".to_string(), "screenplay".to_string()];
        assert!(!thread_matches_terms(&thread, &miss));

        assert!(thread_matches_terms(&thread, &[])); // Empty terms match all
    }
}
