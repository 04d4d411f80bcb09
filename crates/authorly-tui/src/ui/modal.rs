//! Modal overlay state.
//!
//! Modals are transient: they read from the store and call back into App
//! handlers; none of them hold a copy of thread data beyond the id.

use authorly_core::models::{Thread, ThreadState};

/// Which field of the compose form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeField {
    Recipient,
    Subject,
    Body,
}

impl ComposeField {
    pub fn next(self) -> Self {
        match self {
            Self::Recipient => Self::Subject,
            Self::Subject => Self::Body,
            Self::Body => Self::Recipient,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Recipient => Self::Body,
            Self::Subject => Self::Recipient,
            Self::Body => Self::Subject,
        }
    }
}

/// Compose form state. Validation is purely presentational: the boolean
/// gate disables send, nothing round-trips anywhere.
#[derive(Debug, Clone)]
pub struct ComposeState {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub focus: ComposeField,
}

impl ComposeState {
    pub fn new() -> Self {
        Self {
            recipient: String::new(),
            subject: String::new(),
            body: String::new(),
            focus: ComposeField::Recipient,
        }
    }

    /// Send is enabled once recipient and body are non-empty
    pub fn is_valid(&self) -> bool {
        !self.recipient.trim().is_empty() && !self.body.trim().is_empty()
    }

    pub fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            ComposeField::Recipient => &mut self.recipient,
            ComposeField::Subject => &mut self.subject,
            ComposeField::Body => &mut self.body,
        }
    }
}

impl Default for ComposeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Entries of the detail-view overflow menu.
///
/// Only `UndoDecline`, `Archive` and `Unarchive` are authoritative; the
/// rest acknowledge without mutating the store (explicitly inert).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowAction {
    UndoDecline,
    Archive,
    Unarchive,
    Mute,
    MarkUnread,
    Delete,
    Block,
    Report,
}

impl OverflowAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::UndoDecline => "Undo decline",
            Self::Archive => "Archive",
            Self::Unarchive => "Unarchive",
            Self::Mute => "Mute conversation",
            Self::MarkUnread => "Mark as unread",
            Self::Delete => "Delete conversation",
            Self::Block => "Block",
            Self::Report => "Report",
        }
    }

    /// Menu entries applicable to a thread in its current state
    pub fn for_thread(thread: &Thread) -> Vec<OverflowAction> {
        let mut actions = Vec::new();
        if thread.state == ThreadState::Closed {
            actions.push(Self::UndoDecline);
        }
        if thread.archived {
            actions.push(Self::Unarchive);
        } else {
            actions.push(Self::Archive);
        }
        actions.extend([
            Self::Mute,
            Self::MarkUnread,
            Self::Delete,
            Self::Block,
            Self::Report,
        ]);
        actions
    }
}

/// Which modal overlay is showing, if any
#[derive(Debug, Clone)]
pub enum ModalState {
    None,
    /// Decision preview for an unread requested thread
    RequestPreview { thread_id: String },
    Compose(ComposeState),
    OverflowMenu { selected: usize },
}

impl ModalState {
    pub fn is_none(&self) -> bool {
        matches!(self, ModalState::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authorly_core::models::{Intent, Participant, ThreadFields, Verification};

    fn thread(state: ThreadState, archived: bool) -> Thread {
        Thread {
            id: "t".to_string(),
            participant: Participant {
                name: "X".to_string(),
                handle: "x".to_string(),
                city: "C".to_string(),
                state: "ST".to_string(),
                verification: Verification::default(),
            },
            intent: Intent::Other,
            state,
            preview: String::new(),
            timestamp: String::new(),
            unread: false,
            archived,
            fields: ThreadFields::default(),
        }
    }

    #[test]
    fn test_compose_validity_gate() {
        let mut form = ComposeState::new();
        assert!(!form.is_valid());

        form.recipient = "sarahchenwrites".to_string();
        assert!(!form.is_valid());

        form.body = "Hello".to_string();
        assert!(form.is_valid());

        form.body = "   ".to_string();
        assert!(!form.is_valid());
    }

    #[test]
    fn test_compose_focus_cycle() {
        let mut f = ComposeField::Recipient;
        f = f.next();
        assert_eq!(f, ComposeField::Subject);
        f = f.next();
        assert_eq!(f, ComposeField::Body);
        f = f.next();
        assert_eq!(f, ComposeField::Recipient);
        assert_eq!(f.prev(), ComposeField::Body);
    }

    #[test]
    fn test_overflow_menu_offers_undo_decline_only_when_closed() {
        let closed = thread(ThreadState::Closed, false);
        assert_eq!(OverflowAction::for_thread(&closed)[0], OverflowAction::UndoDecline);

        let requested = thread(ThreadState::Requested, false);
        assert!(!OverflowAction::for_thread(&requested).contains(&OverflowAction::UndoDecline));
    }

    #[test]
    fn test_overflow_menu_archive_toggles_with_flag() {
        let active = thread(ThreadState::Accepted, false);
        assert!(OverflowAction::for_thread(&active).contains(&OverflowAction::Archive));

        let archived = thread(ThreadState::Accepted, true);
        let actions = OverflowAction::for_thread(&archived);
        assert!(actions.contains(&OverflowAction::Unarchive));
        assert!(!actions.contains(&OverflowAction::Archive));
    }
}
