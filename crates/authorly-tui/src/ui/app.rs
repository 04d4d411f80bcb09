use authorly_core::models::{Thread, ViewMode};
use authorly_core::store::{visible_threads, StoreError, ThreadStore};
use tracing::warn;

use crate::ui::modal::{ComposeState, ModalState, OverflowAction};
use crate::ui::notifications::{Notification, NotificationQueue};

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    /// Typing in the search input (every keystroke re-filters)
    Search,
    /// Typing in the detail-pane composer
    Composer,
}

pub struct App {
    pub running: bool,
    pub store: ThreadStore,
    pub view_mode: ViewMode,
    pub input_mode: InputMode,
    pub search_query: String,
    /// Cursor position within the visible (filtered) list
    pub cursor: usize,
    /// Selection is an id only - the live thread is always looked up in the
    /// store, so there is no denormalized copy to re-sync after mutations.
    pub selected_thread_id: Option<String>,
    /// Local dismissal of the requested-state quick-action strip.
    /// Independent of thread state; reset whenever the selection changes.
    pub show_quick_actions: bool,
    pub modal_state: ModalState,
    pub composer_input: String,
    pub pending_quit: bool,
    notifications: NotificationQueue,
}

impl App {
    pub fn new(store: ThreadStore) -> Self {
        Self {
            running: true,
            store,
            view_mode: ViewMode::Inbox,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            cursor: 0,
            selected_thread_id: None,
            show_quick_actions: true,
            modal_state: ModalState::None,
            composer_input: String::new(),
            pending_quit: false,
            notifications: NotificationQueue::new(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    // ===== Derived views =====

    /// The filtered thread list for the current tab and query.
    /// Recomputed on demand - nothing caches it.
    pub fn visible(&self) -> Vec<&Thread> {
        visible_threads(self.store.threads(), self.view_mode, &self.search_query)
    }

    /// Cursor clamped against the current visible list
    pub fn clamped_cursor(&self) -> usize {
        let len = self.visible().len();
        if len == 0 {
            0
        } else {
            self.cursor.min(len - 1)
        }
    }

    /// Live lookup of the selected thread
    pub fn selected_thread(&self) -> Option<&Thread> {
        self.selected_thread_id
            .as_deref()
            .and_then(|id| self.store.get_thread(id))
    }

    /// Thread under the list cursor
    pub fn thread_at_cursor(&self) -> Option<&Thread> {
        self.visible().get(self.clamped_cursor()).map(|t| &**t)
    }

    /// Statusbar summary for the active tab
    pub fn summary(&self) -> String {
        match self.view_mode {
            ViewMode::Inbox => format!("Inbox · {} unread", self.store.unread_count()),
            ViewMode::Archived => format!("Archived · {}", self.store.archived_count()),
        }
    }

    // ===== Navigation =====

    pub fn cursor_down(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.cursor = (self.clamped_cursor() + 1).min(len - 1);
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.clamped_cursor().saturating_sub(1);
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggle();
        self.cursor = 0;
    }

    /// Open the thread under the cursor, routing unread requests through
    /// the preview modal. Evaluated fresh from current fields every time -
    /// the preview reopens until the unread/state combination changes.
    pub fn open_at_cursor(&mut self) {
        let Some(thread) = self.thread_at_cursor() else {
            return;
        };
        let id = thread.id.clone();
        if thread.needs_request_preview() {
            self.modal_state = ModalState::RequestPreview { thread_id: id };
        } else {
            self.select_thread(&id);
        }
    }

    /// Select a thread into the detail pane and mark it read
    pub fn select_thread(&mut self, thread_id: &str) {
        if self.selected_thread_id.as_deref() != Some(thread_id) {
            self.show_quick_actions = true;
            self.composer_input.clear();
        }
        self.selected_thread_id = Some(thread_id.to_string());
        if let Err(e) = self.store.mark_read(thread_id) {
            self.report_store_error(e);
        }
    }

    // ===== Lifecycle actions =====

    /// Accept a request. Selection is kept: the id-based lookup already
    /// reflects the new state.
    pub fn accept_thread(&mut self, thread_id: &str) {
        match self.store.accept(thread_id) {
            Ok(change) => {
                self.notify(Notification::with_undo(format!(
                    "Accepted request from {}",
                    change.participant_name
                )));
            }
            Err(e) => self.report_store_error(e),
        }
    }

    /// Decline a request. Unlike accept, a declined selected thread is
    /// deselected - the deliberate asymmetry of the original flow.
    pub fn decline_thread(&mut self, thread_id: &str) {
        match self.store.decline(thread_id) {
            Ok(change) => {
                if self.selected_thread_id.as_deref() == Some(thread_id) {
                    self.selected_thread_id = None;
                }
                self.notify(Notification::with_undo(format!(
                    "Declined request from {}",
                    change.participant_name
                )));
            }
            Err(e) => self.report_store_error(e),
        }
    }

    /// Time-boxed toast undo: only works while an undo-bearing toast is
    /// visible. The store's slot may outlive the toast; the affordance
    /// does not.
    pub fn undo_from_toast(&mut self) {
        if !self.notifications.current_offers_undo() {
            return;
        }
        if let Some(change) = self.store.undo_last() {
            self.notifications.dismiss();
            self.notify(Notification::info(format!(
                "Restored {} to {}",
                change.participant_name,
                change.new_state.label()
            )));
        }
    }

    /// Overflow-menu "Undo decline" - unconditional, unlike the toast undo
    pub fn restore_thread(&mut self, thread_id: &str) {
        match self.store.restore_to_requested(thread_id) {
            Ok(change) => {
                self.notify(Notification::success(format!(
                    "Moved {} back to requests",
                    change.participant_name
                )));
            }
            Err(e) => self.report_store_error(e),
        }
    }

    /// Archive a thread. The archived thread leaves the active list, so a
    /// selected thread is deselected.
    pub fn archive_thread(&mut self, thread_id: &str) {
        match self.store.archive(thread_id) {
            Ok(()) => {
                if self.selected_thread_id.as_deref() == Some(thread_id) {
                    self.selected_thread_id = None;
                }
                self.notify(Notification::success("Conversation archived"));
            }
            Err(e) => self.report_store_error(e),
        }
    }

    pub fn unarchive_thread(&mut self, thread_id: &str) {
        match self.store.unarchive(thread_id) {
            Ok(()) => {
                if self.selected_thread_id.as_deref() == Some(thread_id) {
                    self.selected_thread_id = None;
                }
                self.notify(Notification::success("Conversation restored to inbox"));
            }
            Err(e) => self.report_store_error(e),
        }
    }

    /// Apply an overflow-menu action to the selected thread
    pub fn apply_overflow(&mut self, action: OverflowAction) {
        let Some(id) = self.selected_thread_id.clone() else {
            return;
        };
        match action {
            OverflowAction::UndoDecline => self.restore_thread(&id),
            OverflowAction::Archive => self.archive_thread(&id),
            OverflowAction::Unarchive => self.unarchive_thread(&id),
            // Acknowledgement-only: these mutate nothing
            OverflowAction::Mute => self.acknowledge("Conversation muted"),
            OverflowAction::MarkUnread => self.acknowledge("Marked as unread"),
            OverflowAction::Delete => self.acknowledge("Conversation deleted"),
            OverflowAction::Block => self.acknowledge("Sender blocked"),
            OverflowAction::Report => self.acknowledge("Report submitted"),
        }
    }

    /// Transient acknowledgement for an action that is explicitly inert
    pub fn acknowledge(&mut self, message: &str) {
        self.notify(Notification::info(message));
    }

    // ===== Composer =====

    pub fn composer_disabled_hint(&self) -> Option<&'static str> {
        if self.store.sends_remaining() == 0 {
            Some("Daily send limit reached")
        } else {
            None
        }
    }

    /// Send the composer line into the selected thread's conversation
    pub fn send_composer_message(&mut self) {
        let Some(id) = self.selected_thread_id.clone() else {
            return;
        };
        let content = self.composer_input.trim().to_string();
        if content.is_empty() {
            return;
        }
        match self.store.send_message(&id, &content) {
            Ok(()) => {
                self.composer_input.clear();
            }
            Err(e @ StoreError::SendLimitReached { .. }) => {
                self.notify(Notification::warning(e.to_string()));
            }
            Err(e) => self.report_store_error(e),
        }
    }

    /// Compose-modal send: acknowledged only, no thread is materialized
    pub fn send_compose_form(&mut self, form: &ComposeState) {
        self.notify(Notification::success(format!(
            "Message sent to @{}",
            form.recipient.trim()
        )));
    }

    // ===== Notifications =====

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn current_notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
    }

    pub fn toast_offers_undo(&self) -> bool {
        self.notifications.current_offers_undo()
    }

    /// Advance toast expiry; called from the runtime tick
    pub fn tick(&mut self) {
        self.notifications.tick();
    }

    fn report_store_error(&mut self, error: StoreError) {
        warn!(%error, "store operation failed");
        self.notify(Notification::warning(error.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authorly_core::models::ThreadState;
    use authorly_core::seed;

    fn app() -> App {
        let (threads, messages) = seed::builtin();
        App::new(ThreadStore::new(threads, messages))
    }

    #[test]
    fn test_open_routes_unread_request_to_preview() {
        let mut app = app();
        // Seed row 0 is the unread requested thread
        app.cursor = 0;
        app.open_at_cursor();
        assert!(matches!(
            app.modal_state,
            ModalState::RequestPreview { ref thread_id } if thread_id == "thr-001"
        ));
        assert!(app.selected_thread_id.is_none());
    }

    #[test]
    fn test_open_selects_read_thread_directly() {
        let mut app = app();
        app.cursor = 1; // accepted, read
        app.open_at_cursor();
        assert!(app.modal_state.is_none());
        assert_eq!(app.selected_thread_id.as_deref(), Some("thr-002"));
    }

    #[test]
    fn test_preview_reopens_until_state_changes() {
        let mut app = app();
        app.cursor = 0;
        app.open_at_cursor();
        app.modal_state = ModalState::None; // dismiss without deciding

        // Still unread + requested: preview again
        app.open_at_cursor();
        assert!(matches!(app.modal_state, ModalState::RequestPreview { .. }));

        app.modal_state = ModalState::None;
        app.accept_thread("thr-001");
        app.open_at_cursor();
        assert!(app.modal_state.is_none());
        assert_eq!(app.selected_thread_id.as_deref(), Some("thr-001"));
    }

    #[test]
    fn test_accept_keeps_selection_decline_clears_it() {
        let mut app = app();
        app.select_thread("thr-001");

        app.accept_thread("thr-001");
        assert_eq!(app.selected_thread_id.as_deref(), Some("thr-001"));
        assert_eq!(
            app.selected_thread().unwrap().state,
            ThreadState::Accepted
        );

        app.decline_thread("thr-001");
        assert!(app.selected_thread_id.is_none());
    }

    #[test]
    fn test_archive_clears_selection_and_moves_tab() {
        let mut app = app();
        app.select_thread("thr-002");
        app.archive_thread("thr-002");

        assert!(app.selected_thread_id.is_none());
        assert!(!app.visible().iter().any(|t| t.id == "thr-002"));

        app.toggle_view_mode();
        assert!(app.visible().iter().any(|t| t.id == "thr-002"));
    }

    #[test]
    fn test_toast_undo_respects_display_window() {
        let mut app = app();
        app.accept_thread("thr-001");
        assert!(app.toast_offers_undo());

        app.undo_from_toast();
        assert_eq!(
            app.store.get_thread("thr-001").unwrap().state,
            ThreadState::Requested
        );

        // Affordance gone with the toast: a second undo is a no-op
        app.accept_thread("thr-001");
        app.dismiss_notification();
        app.undo_from_toast();
        assert_eq!(
            app.store.get_thread("thr-001").unwrap().state,
            ThreadState::Accepted
        );
    }

    #[test]
    fn test_selection_change_resets_quick_actions() {
        let mut app = app();
        app.select_thread("thr-001");
        app.show_quick_actions = false;

        app.select_thread("thr-002");
        assert!(app.show_quick_actions);
    }

    #[test]
    fn test_inert_overflow_actions_leave_store_untouched() {
        let mut app = app();
        app.select_thread("thr-002");
        let state_before = app.selected_thread().unwrap().state;
        let count_before = app.store.threads().len();

        app.apply_overflow(OverflowAction::Delete);
        app.apply_overflow(OverflowAction::Mute);
        app.apply_overflow(OverflowAction::Block);

        assert_eq!(app.store.threads().len(), count_before);
        assert_eq!(app.selected_thread().unwrap().state, state_before);
    }

    #[test]
    fn test_search_narrows_cursor_range() {
        let mut app = app();
        app.cursor = 3;
        app.search_query = "sarah".to_string();
        assert_eq!(app.visible().len(), 1);
        assert_eq!(app.clamped_cursor(), 0);
        assert_eq!(app.thread_at_cursor().unwrap().id, "thr-001");
    }
}
