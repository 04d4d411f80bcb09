//! Session seed data and the optional JSON seed-file format.
//!
//! Threads are created only as seed data in this build - the compose flow
//! acknowledges without materializing a thread. The built-in seed covers
//! every lifecycle state plus archived threads in both states.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::{
    Intent, Message, Participant, Sender, Thread, ThreadFields, ThreadState, Verification,
};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk shape for `--seed <path.json>`
#[derive(Debug, Serialize, Deserialize)]
pub struct SeedFile {
    pub threads: Vec<Thread>,
    #[serde(default)]
    pub messages: HashMap<String, Vec<Message>>,
}

/// Load a seed collection from a JSON file
pub fn load_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<(Vec<Thread>, HashMap<String, Vec<Message>>), SeedError> {
    let raw = std::fs::read_to_string(path)?;
    let file: SeedFile = serde_json::from_str(&raw)?;
    Ok((file.threads, file.messages))
}

fn msg(id: &str, sender: Sender, content: &str, timestamp: &str, read: Option<bool>) -> Message {
    Message {
        id: id.to_string(),
        sender,
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        read,
    }
}

/// The built-in session seed.
pub fn builtin() -> (Vec<Thread>, HashMap<String, Vec<Message>>) {
    let threads = vec![
        Thread {
            id: "thr-001".to_string(),
            participant: Participant {
                name: "Sarah Chen".to_string(),
                handle: "sarahchenwrites".to_string(),
                city: "Portland".to_string(),
                state: "OR".to_string(),
                verification: Verification {
                    domain_verified: true,
                    isni: Some("0000 0004 1936 8753".to_string()),
                    orcid: Some("0000-0002-1825-0097".to_string()),
                },
            },
            intent: Intent::Hire,
            state: ThreadState::Requested,
            preview: "Looking for a ghostwriter for a founder memoir - saw your piece on \
                      narrative structure and think you'd be a great fit."
                .to_string(),
            timestamp: "2h ago".to_string(),
            unread: true,
            archived: false,
            fields: ThreadFields {
                budget: Some("$5k-$10k".to_string()),
                timeline: Some("3 months".to_string()),
                role: Some("Ghostwriter".to_string()),
                service: None,
            },
        },
        Thread {
            id: "thr-002".to_string(),
            participant: Participant {
                name: "Marcus Webb".to_string(),
                handle: "mwebb".to_string(),
                city: "Chicago".to_string(),
                state: "IL".to_string(),
                verification: Verification {
                    domain_verified: true,
                    isni: None,
                    orcid: None,
                },
            },
            intent: Intent::Collaborate,
            state: ThreadState::Accepted,
            preview: "Great - I'll send over the outline for the co-authored series tonight."
                .to_string(),
            timestamp: "Yesterday".to_string(),
            unread: false,
            archived: false,
            fields: ThreadFields {
                budget: None,
                timeline: Some("Q4".to_string()),
                role: None,
                service: None,
            },
        },
        Thread {
            id: "thr-003".to_string(),
            participant: Participant {
                name: "Priya Natarajan".to_string(),
                handle: "priya_edits".to_string(),
                city: "Austin".to_string(),
                state: "TX".to_string(),
                verification: Verification {
                    domain_verified: false,
                    isni: None,
                    orcid: Some("0000-0003-1415-9269".to_string()),
                },
            },
            intent: Intent::Service,
            state: ThreadState::InProgress,
            preview: "First developmental pass is done, notes attached inline.".to_string(),
            timestamp: "Mon".to_string(),
            unread: false,
            archived: false,
            fields: ThreadFields {
                budget: Some("$120/hr".to_string()),
                timeline: None,
                role: None,
                service: Some("Developmental editing".to_string()),
            },
        },
        Thread {
            id: "thr-004".to_string(),
            participant: Participant {
                name: "Tom Okafor".to_string(),
                handle: "tokafor".to_string(),
                city: "Newark".to_string(),
                state: "NJ".to_string(),
                verification: Verification::default(),
            },
            intent: Intent::Other,
            state: ThreadState::Closed,
            preview: "Quick question about syndicating one of your columns.".to_string(),
            timestamp: "Last week".to_string(),
            unread: false,
            archived: false,
            fields: ThreadFields::default(),
        },
        Thread {
            id: "thr-005".to_string(),
            participant: Participant {
                name: "Dana Whitfield".to_string(),
                handle: "dwhitfield".to_string(),
                city: "Nashville".to_string(),
                state: "TN".to_string(),
                verification: Verification {
                    domain_verified: true,
                    isni: Some("0000 0001 2103 2683".to_string()),
                    orcid: None,
                },
            },
            intent: Intent::RightsLicensing,
            state: ThreadState::Accepted,
            preview: "Contract countersigned - audio rights wrap up end of month.".to_string(),
            timestamp: "Mar 12".to_string(),
            unread: false,
            archived: true,
            fields: ThreadFields {
                budget: Some("Flat $2,500".to_string()),
                timeline: None,
                role: None,
                service: None,
            },
        },
        Thread {
            id: "thr-006".to_string(),
            participant: Participant {
                name: "Colin Mercer".to_string(),
                handle: "cmercer".to_string(),
                city: "Denver".to_string(),
                state: "CO".to_string(),
                verification: Verification::default(),
            },
            intent: Intent::Hire,
            state: ThreadState::Closed,
            preview: "Thanks anyway - we went with an in-house writer.".to_string(),
            timestamp: "Feb 28".to_string(),
            unread: false,
            archived: true,
            fields: ThreadFields {
                budget: Some("$1k".to_string()),
                timeline: Some("2 weeks".to_string()),
                role: None,
                service: None,
            },
        },
    ];

    let mut messages: HashMap<String, Vec<Message>> = HashMap::new();
    messages.insert(
        "thr-001".to_string(),
        vec![msg(
            "msg-001-1",
            Sender::Counterpart,
            "Hi! I run a small venture studio and I'm looking for a ghostwriter for a founder \
             memoir. Saw your piece on narrative structure and think you'd be a great fit. \
             Budget is flexible within the posted range.",
            "2h ago",
            None,
        )],
    );
    messages.insert(
        "thr-002".to_string(),
        vec![
            msg(
                "msg-002-1",
                Sender::Counterpart,
                "Loved your climate series. Would you be open to co-authoring a follow-up?",
                "Tue 9:14 AM",
                None,
            ),
            msg(
                "msg-002-2",
                Sender::User,
                "Absolutely - do you have a scope in mind?",
                "Tue 11:02 AM",
                Some(true),
            ),
            msg(
                "msg-002-3",
                Sender::Counterpart,
                "Great - I'll send over the outline for the co-authored series tonight.",
                "Yesterday",
                None,
            ),
        ],
    );
    messages.insert(
        "thr-003".to_string(),
        vec![
            msg(
                "msg-003-1",
                Sender::User,
                "Manuscript uploaded. Chapters 4-6 are the roughest.",
                "Fri 3:30 PM",
                Some(true),
            ),
            msg(
                "msg-003-2",
                Sender::Counterpart,
                "First developmental pass is done, notes attached inline.",
                "Mon",
                None,
            ),
        ],
    );
    messages.insert(
        "thr-004".to_string(),
        vec![msg(
            "msg-004-1",
            Sender::Counterpart,
            "Quick question about syndicating one of your columns.",
            "Last week",
            None,
        )],
    );
    messages.insert(
        "thr-005".to_string(),
        vec![
            msg(
                "msg-005-1",
                Sender::Counterpart,
                "We'd like to license audio rights for the essay collection.",
                "Mar 10",
                None,
            ),
            msg(
                "msg-005-2",
                Sender::User,
                "Works for me. Sending the standard terms.",
                "Mar 11",
                Some(true),
            ),
            msg(
                "msg-005-3",
                Sender::Counterpart,
                "Contract countersigned - audio rights wrap up end of month.",
                "Mar 12",
                None,
            ),
        ],
    );
    messages.insert(
        "thr-006".to_string(),
        vec![msg(
            "msg-006-1",
            Sender::Counterpart,
            "Thanks anyway - we went with an in-house writer.",
            "Feb 28",
            None,
        )],
    );

    (threads, messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_state() {
        let (threads, _) = builtin();
        for state in [
            ThreadState::Requested,
            ThreadState::Accepted,
            ThreadState::InProgress,
            ThreadState::Closed,
        ] {
            assert!(
                threads.iter().any(|t| t.state == state),
                "missing {state:?}"
            );
        }
        assert!(threads.iter().any(|t| t.archived));
        assert!(threads.iter().any(|t| !t.archived));
    }

    #[test]
    fn test_builtin_requested_thread_is_unread() {
        let (threads, _) = builtin();
        let sarah = threads.iter().find(|t| t.id == "thr-001").unwrap();
        assert!(sarah.needs_request_preview());
        assert_eq!(sarah.fields.budget.as_deref(), Some("$5k-$10k"));
    }

    #[test]
    fn test_every_thread_has_messages() {
        let (threads, messages) = builtin();
        for thread in &threads {
            assert!(
                messages.get(&thread.id).is_some_and(|m| !m.is_empty()),
                "no messages for {}",
                thread.id
            );
        }
    }

    #[test]
    fn test_seed_file_roundtrip() {
        let (threads, messages) = builtin();
        let file = SeedFile {
            threads,
            messages,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, serde_json::to_string_pretty(&file).unwrap()).unwrap();

        let (threads, messages) = load_from_path(&path).unwrap();
        assert_eq!(threads.len(), file.threads.len());
        assert_eq!(messages.len(), file.messages.len());
        assert_eq!(threads[0].participant.name, "Sarah Chen");
    }

    #[test]
    fn test_missing_seed_file_is_an_io_error() {
        let err = load_from_path("/nonexistent/seed.json").unwrap_err();
        assert!(matches!(err, SeedError::Io(_)));
    }
}
