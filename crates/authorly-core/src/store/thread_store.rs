use std::collections::HashMap;

use chrono::Local;
use tracing::debug;

use crate::constants::SESSION_SEND_LIMIT;
use crate::models::{Message, Sender, Thread, ThreadState};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("thread not found: {0}")]
    ThreadNotFound(String),

    #[error("session send limit reached ({limit} messages)")]
    SendLimitReached { limit: u32 },
}

/// The single most-recent undoable lifecycle action.
///
/// Capacity is exactly one: a second accept/decline before an undo
/// overwrites this record and the first action's undo capability is gone
/// (last-writer-wins).
#[derive(Debug, Clone)]
pub struct UndoRecord {
    pub thread_id: String,
    pub previous_state: ThreadState,
}

/// What a lifecycle mutation did, returned to the caller so the
/// presentation layer can decide how to notify. The store itself never
/// raises toasts.
#[derive(Debug, Clone)]
pub struct LifecycleChange {
    pub thread_id: String,
    pub participant_name: String,
    pub previous_state: ThreadState,
    pub new_state: ThreadState,
}

/// Canonical collection of message threads and their conversations.
/// Single source of truth for the session; lives in process memory only.
pub struct ThreadStore {
    /// Insertion order is the display order - derived views never re-rank
    threads: Vec<Thread>,
    messages_by_thread: HashMap<String, Vec<Message>>,
    /// One-slot undo record for the toast-undo affordance
    undo_record: Option<UndoRecord>,
    /// Messages sent through the composer this session
    sent_count: u32,
}

impl ThreadStore {
    pub fn new(threads: Vec<Thread>, messages_by_thread: HashMap<String, Vec<Message>>) -> Self {
        Self {
            threads,
            messages_by_thread,
            undo_record: None,
            sent_count: 0,
        }
    }

    // ===== Getters =====

    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    pub fn get_thread(&self, id: &str) -> Option<&Thread> {
        self.threads.iter().find(|t| t.id == id)
    }

    pub fn messages(&self, thread_id: &str) -> &[Message] {
        self.messages_by_thread
            .get(thread_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the one-slot undo record currently holds anything
    pub fn has_undo(&self) -> bool {
        self.undo_record.is_some()
    }

    pub fn sends_remaining(&self) -> u32 {
        SESSION_SEND_LIMIT.saturating_sub(self.sent_count)
    }

    pub fn unread_count(&self) -> usize {
        self.threads.iter().filter(|t| t.unread && !t.archived).count()
    }

    pub fn archived_count(&self) -> usize {
        self.threads.iter().filter(|t| t.archived).count()
    }

    // ===== Lifecycle mutations =====

    /// Accept a request: state becomes `Accepted`, the thread is marked
    /// read, and the undo slot records the prior state. Offered by the UI
    /// only for `Requested` threads; the store does not reject other
    /// source states.
    pub fn accept(&mut self, thread_id: &str) -> Result<LifecycleChange, StoreError> {
        self.transition(thread_id, ThreadState::Accepted)
    }

    /// Decline a request: state becomes `Closed`. Declining an
    /// already-closed thread is idempotent (the state stays `Closed`).
    pub fn decline(&mut self, thread_id: &str) -> Result<LifecycleChange, StoreError> {
        self.transition(thread_id, ThreadState::Closed)
    }

    fn transition(
        &mut self,
        thread_id: &str,
        new_state: ThreadState,
    ) -> Result<LifecycleChange, StoreError> {
        let thread = self.find_mut(thread_id)?;
        let previous_state = thread.state;
        thread.state = new_state;
        thread.unread = false;
        let change = LifecycleChange {
            thread_id: thread.id.clone(),
            participant_name: thread.participant.name.clone(),
            previous_state,
            new_state,
        };
        // Overwrites any prior record - capacity is exactly one
        self.undo_record = Some(UndoRecord {
            thread_id: thread_id.to_string(),
            previous_state,
        });
        debug!(
            thread_id,
            from = previous_state.label(),
            to = new_state.label(),
            "lifecycle transition"
        );
        Ok(change)
    }

    /// Consume the undo slot and restore the recorded previous state.
    /// Returns what was undone, or None when the slot is empty or the
    /// recorded thread no longer resolves.
    ///
    /// Archive flags are never touched by accept/decline/undo.
    pub fn undo_last(&mut self) -> Option<LifecycleChange> {
        let record = self.undo_record.take()?;
        let thread = self
            .threads
            .iter_mut()
            .find(|t| t.id == record.thread_id)?;
        let undone_from = thread.state;
        thread.state = record.previous_state;
        debug!(
            thread_id = record.thread_id.as_str(),
            restored = record.previous_state.label(),
            "undo lifecycle transition"
        );
        Some(LifecycleChange {
            thread_id: thread.id.clone(),
            participant_name: thread.participant.name.clone(),
            previous_state: undone_from,
            new_state: record.previous_state,
        })
    }

    /// Unconditionally put a thread back into `Requested` and clear the
    /// undo slot. Backs the overflow-menu "Undo decline", distinct from
    /// the time-boxed toast undo.
    pub fn restore_to_requested(
        &mut self,
        thread_id: &str,
    ) -> Result<LifecycleChange, StoreError> {
        let thread = self.find_mut(thread_id)?;
        let previous_state = thread.state;
        thread.state = ThreadState::Requested;
        let change = LifecycleChange {
            thread_id: thread.id.clone(),
            participant_name: thread.participant.name.clone(),
            previous_state,
            new_state: ThreadState::Requested,
        };
        self.undo_record = None;
        debug!(thread_id, "restored to requested");
        Ok(change)
    }

    // ===== Archive mutations =====

    /// Archive a thread. Lifecycle state is untouched; the thread simply
    /// leaves the inbox view.
    pub fn archive(&mut self, thread_id: &str) -> Result<(), StoreError> {
        let thread = self.find_mut(thread_id)?;
        thread.archived = true;
        debug!(thread_id, "archived");
        Ok(())
    }

    /// Restore an archived thread to the inbox, lifecycle state intact.
    pub fn unarchive(&mut self, thread_id: &str) -> Result<(), StoreError> {
        let thread = self.find_mut(thread_id)?;
        thread.archived = false;
        debug!(thread_id, "unarchived");
        Ok(())
    }

    // ===== Read state =====

    /// Clear the unread flag. Called when a thread is opened directly into
    /// the detail view (not through the request preview).
    pub fn mark_read(&mut self, thread_id: &str) -> Result<(), StoreError> {
        let thread = self.find_mut(thread_id)?;
        thread.unread = false;
        Ok(())
    }

    // ===== Composer =====

    /// Append a user message to a thread's conversation. Fails with
    /// `SendLimitReached` once the session cap is hit; the UI disables the
    /// composer with a hint at that point.
    pub fn send_message(&mut self, thread_id: &str, content: &str) -> Result<(), StoreError> {
        if self.sent_count >= SESSION_SEND_LIMIT {
            return Err(StoreError::SendLimitReached {
                limit: SESSION_SEND_LIMIT,
            });
        }
        if self.get_thread(thread_id).is_none() {
            return Err(StoreError::ThreadNotFound(thread_id.to_string()));
        }

        let message = Message {
            id: uuid::Uuid::new_v4().to_string(),
            sender: Sender::User,
            content: content.to_string(),
            timestamp: Local::now().format("%-I:%M %p").to_string(),
            read: None,
        };
        self.sent_count += 1;
        self.messages_by_thread
            .entry(thread_id.to_string())
            .or_default()
            .push(message);
        debug!(thread_id, sent = self.sent_count, "message sent");
        Ok(())
    }

    fn find_mut(&mut self, thread_id: &str) -> Result<&mut Thread, StoreError> {
        self.threads
            .iter_mut()
            .find(|t| t.id == thread_id)
            .ok_or_else(|| StoreError::ThreadNotFound(thread_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn store() -> ThreadStore {
        let (threads, messages) = seed::builtin();
        ThreadStore::new(threads, messages)
    }

    fn requested_id(store: &ThreadStore) -> String {
        store
            .threads()
            .iter()
            .find(|t| t.state == ThreadState::Requested && !t.archived)
            .map(|t| t.id.clone())
            .expect("seed has a requested thread")
    }

    #[test]
    fn test_accept_sets_state_and_clears_unread() {
        let mut store = store();
        let id = requested_id(&store);

        let change = store.accept(&id).unwrap();
        assert_eq!(change.previous_state, ThreadState::Requested);
        assert_eq!(change.new_state, ThreadState::Accepted);

        let thread = store.get_thread(&id).unwrap();
        assert_eq!(thread.state, ThreadState::Accepted);
        assert!(!thread.unread);
    }

    #[test]
    fn test_accept_then_undo_restores_state_and_leaves_archive_alone() {
        let mut store = store();
        let id = requested_id(&store);
        let archived_before = store.get_thread(&id).unwrap().archived;

        store.accept(&id).unwrap();
        let undone = store.undo_last().expect("undo record present");
        assert_eq!(undone.new_state, ThreadState::Requested);

        let thread = store.get_thread(&id).unwrap();
        assert_eq!(thread.state, ThreadState::Requested);
        assert_eq!(thread.archived, archived_before);
        assert!(!store.has_undo());
    }

    #[test]
    fn test_decline_is_idempotent() {
        let mut store = store();
        let id = requested_id(&store);

        let first = store.decline(&id).unwrap();
        assert_eq!(first.new_state, ThreadState::Closed);

        let second = store.decline(&id).unwrap();
        assert_eq!(second.previous_state, ThreadState::Closed);
        assert_eq!(store.get_thread(&id).unwrap().state, ThreadState::Closed);

        // Undo after the second decline restores Closed, not Requested
        let undone = store.undo_last().unwrap();
        assert_eq!(undone.new_state, ThreadState::Closed);
    }

    #[test]
    fn test_undo_capacity_is_one() {
        let mut store = store();
        let ids: Vec<String> = store
            .threads()
            .iter()
            .filter(|t| !t.archived)
            .map(|t| t.id.clone())
            .collect();
        let (a, b) = (&ids[0], &ids[1]);
        let a_prior = store.get_thread(a).unwrap().state;

        store.accept(a).unwrap();
        store.decline(b).unwrap();

        // The record now points at B; A keeps its post-accept state
        let undone = store.undo_last().unwrap();
        assert_eq!(undone.thread_id, *b);
        assert_eq!(store.get_thread(a).unwrap().state, ThreadState::Accepted);
        assert_ne!(store.get_thread(a).unwrap().state, a_prior);
    }

    #[test]
    fn test_archive_roundtrip_preserves_state() {
        let mut store = store();
        let id = requested_id(&store);
        let state_before = store.get_thread(&id).unwrap().state;

        store.archive(&id).unwrap();
        assert!(store.get_thread(&id).unwrap().archived);
        assert_eq!(store.get_thread(&id).unwrap().state, state_before);

        store.unarchive(&id).unwrap();
        assert!(!store.get_thread(&id).unwrap().archived);
        assert_eq!(store.get_thread(&id).unwrap().state, state_before);
    }

    #[test]
    fn test_restore_to_requested_clears_undo_slot() {
        let mut store = store();
        let id = requested_id(&store);

        store.decline(&id).unwrap();
        assert!(store.has_undo());

        store.restore_to_requested(&id).unwrap();
        assert_eq!(store.get_thread(&id).unwrap().state, ThreadState::Requested);
        assert!(!store.has_undo());
        assert!(store.undo_last().is_none());
    }

    #[test]
    fn test_unknown_id_is_an_error_not_a_silent_noop() {
        let mut store = store();
        assert!(matches!(
            store.accept("no-such-thread"),
            Err(StoreError::ThreadNotFound(_))
        ));
        assert!(matches!(
            store.archive("no-such-thread"),
            Err(StoreError::ThreadNotFound(_))
        ));
    }

    #[test]
    fn test_states_stay_in_the_closed_set() {
        // Any sequence of lifecycle calls leaves every thread in one of the
        // four enum states - the type system guarantees it, this asserts
        // the store never loses a thread along the way.
        let mut store = store();
        let ids: Vec<String> = store.threads().iter().map(|t| t.id.clone()).collect();
        let count_before = store.threads().len();

        for id in &ids {
            let _ = store.accept(id);
            let _ = store.decline(id);
            let _ = store.undo_last();
            let _ = store.restore_to_requested(id);
        }

        assert_eq!(store.threads().len(), count_before);
    }

    #[test]
    fn test_send_message_appends_and_respects_limit() {
        let mut store = store();
        let id = requested_id(&store);
        let before = store.messages(&id).len();

        store.send_message(&id, "Thanks for reaching out").unwrap();
        assert_eq!(store.messages(&id).len(), before + 1);
        assert!(store.messages(&id).last().unwrap().is_from_user());

        for _ in 0..SESSION_SEND_LIMIT {
            let _ = store.send_message(&id, "spam");
        }
        assert!(matches!(
            store.send_message(&id, "one more"),
            Err(StoreError::SendLimitReached { .. })
        ));
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let store = store();
        let mut ids: Vec<&str> = store.threads().iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.threads().len());
    }
}
