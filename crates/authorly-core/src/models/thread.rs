use serde::{Deserialize, Serialize};

use super::participant::Participant;

/// Lifecycle state of a thread.
///
/// Transitions driven by the store: `Requested -> Accepted` (accept),
/// `Requested -> Closed` (decline), `Closed -> Requested` (undo decline).
/// `InProgress` is reachable only through seed data; nothing in this crate
/// drives a thread into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThreadState {
    Requested,
    Accepted,
    InProgress,
    Closed,
}

impl ThreadState {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Accepted => "accepted",
            Self::InProgress => "in progress",
            Self::Closed => "closed",
        }
    }
}

/// Why the counterpart reached out. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    Hire,
    Collaborate,
    Service,
    RightsLicensing,
    Other,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hire => "hire",
            Self::Collaborate => "collaborate",
            Self::Service => "service",
            Self::RightsLicensing => "rights licensing",
            Self::Other => "other",
        }
    }
}

/// Optional structured request details. Display-only, never validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThreadFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl ThreadFields {
    /// Defined (label, value) pairs in display order
    pub fn defined(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        if let Some(ref b) = self.budget {
            out.push(("Budget", b.as_str()));
        }
        if let Some(ref t) = self.timeline {
            out.push(("Timeline", t.as_str()));
        }
        if let Some(ref r) = self.role {
            out.push(("Role", r.as_str()));
        }
        if let Some(ref s) = self.service {
            out.push(("Service", s.as_str()));
        }
        out
    }
}

/// A conversation between the current user and one counterpart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    /// Unique within the store for the process lifetime
    pub id: String,
    pub participant: Participant,
    pub intent: Intent,
    pub state: ThreadState,
    /// Free-text preview shown in the list row and request preview
    pub preview: String,
    /// Display timestamp (e.g. "2h ago") - opaque, not a sortable instant
    pub timestamp: String,
    pub unread: bool,
    /// Orthogonal to `state`: an archived thread keeps its lifecycle state
    /// and restores without state loss
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub fields: ThreadFields,
}

impl Thread {
    /// Whether opening this thread must route through the request preview
    /// instead of straight to the detail view
    pub fn needs_request_preview(&self) -> bool {
        self.unread && self.state == ThreadState::Requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Verification;

    fn thread(state: ThreadState, unread: bool) -> Thread {
        Thread {
            id: "t1".to_string(),
            participant: Participant {
                name: "Test".to_string(),
                handle: "test".to_string(),
                city: "Austin".to_string(),
                state: "TX".to_string(),
                verification: Verification::default(),
            },
            intent: Intent::Hire,
            state,
            preview: String::new(),
            timestamp: "now".to_string(),
            unread,
            archived: false,
            fields: ThreadFields::default(),
        }
    }

    #[test]
    fn test_preview_routing_requires_unread_and_requested() {
        assert!(thread(ThreadState::Requested, true).needs_request_preview());
        assert!(!thread(ThreadState::Requested, false).needs_request_preview());
        assert!(!thread(ThreadState::Accepted, true).needs_request_preview());
        assert!(!thread(ThreadState::Closed, false).needs_request_preview());
    }

    #[test]
    fn test_state_serde_names() {
        let json = serde_json::to_string(&ThreadState::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: ThreadState = serde_json::from_str("\"requested\"").unwrap();
        assert_eq!(back, ThreadState::Requested);
    }

    #[test]
    fn test_defined_fields_order() {
        let fields = ThreadFields {
            budget: Some("$5k-$10k".to_string()),
            timeline: None,
            role: Some("Ghostwriter".to_string()),
            service: None,
        };
        let defined = fields.defined();
        assert_eq!(defined, vec![("Budget", "$5k-$10k"), ("Role", "Ghostwriter")]);
    }
}
