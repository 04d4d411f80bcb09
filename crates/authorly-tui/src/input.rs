//! Keyboard dispatch.
//!
//! Order matters: an open modal consumes keys first, then the active input
//! mode, then normal-mode navigation and actions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use authorly_core::models::ThreadState;

use crate::ui::modal::{ComposeState, ModalState, OverflowAction};
use crate::ui::{App, InputMode};

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if !app.modal_state.is_none() {
        handle_modal_key(app, key);
        return Ok(());
    }

    match app.input_mode {
        InputMode::Search => handle_search_key(app, key),
        InputMode::Composer => handle_composer_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
    Ok(())
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    let modal = std::mem::replace(&mut app.modal_state, ModalState::None);
    match modal {
        ModalState::RequestPreview { thread_id } => match key.code {
            KeyCode::Char('a') => app.accept_thread(&thread_id),
            KeyCode::Char('d') => app.decline_thread(&thread_id),
            KeyCode::Char('i') => {
                // Ask a question: select without changing lifecycle state.
                // Selection marks the thread read, so the next open goes
                // straight to the detail view.
                app.select_thread(&thread_id);
                app.input_mode = InputMode::Composer;
            }
            KeyCode::Esc => {}
            _ => {
                // Unhandled key keeps the modal open
                app.modal_state = ModalState::RequestPreview { thread_id };
            }
        },
        ModalState::Compose(mut form) => match key.code {
            KeyCode::Esc => {}
            KeyCode::Tab => {
                form.focus = form.focus.next();
                app.modal_state = ModalState::Compose(form);
            }
            KeyCode::BackTab => {
                form.focus = form.focus.prev();
                app.modal_state = ModalState::Compose(form);
            }
            KeyCode::Enter => {
                if form.is_valid() && app.composer_disabled_hint().is_none() {
                    app.send_compose_form(&form);
                } else {
                    // Gate closed - keep editing
                    app.modal_state = ModalState::Compose(form);
                }
            }
            KeyCode::Char(c) => {
                form.focused_field_mut().push(c);
                app.modal_state = ModalState::Compose(form);
            }
            KeyCode::Backspace => {
                form.focused_field_mut().pop();
                app.modal_state = ModalState::Compose(form);
            }
            _ => {
                app.modal_state = ModalState::Compose(form);
            }
        },
        ModalState::OverflowMenu { selected } => {
            let action_count = app
                .selected_thread()
                .map(|t| OverflowAction::for_thread(t).len())
                .unwrap_or(0);
            match key.code {
                KeyCode::Esc | KeyCode::Char('m') => {}
                KeyCode::Down | KeyCode::Char('j') => {
                    let next = (selected + 1).min(action_count.saturating_sub(1));
                    app.modal_state = ModalState::OverflowMenu { selected: next };
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    app.modal_state = ModalState::OverflowMenu {
                        selected: selected.saturating_sub(1),
                    };
                }
                KeyCode::Enter => {
                    let action = app
                        .selected_thread()
                        .map(|t| OverflowAction::for_thread(t))
                        .and_then(|actions| actions.get(selected).copied());
                    if let Some(action) = action {
                        app.apply_overflow(action);
                    }
                }
                _ => {
                    app.modal_state = ModalState::OverflowMenu { selected };
                }
            }
        }
        ModalState::None => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.search_query.clear();
            app.cursor = 0;
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char(c) => {
            app.search_query.push(c);
            app.cursor = 0;
        }
        KeyCode::Backspace => {
            app.search_query.pop();
            app.cursor = 0;
        }
        _ => {}
    }
}

fn handle_composer_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            app.send_composer_message();
        }
        KeyCode::Char(c) => {
            app.composer_input.push(c);
        }
        KeyCode::Backspace => {
            app.composer_input.pop();
        }
        _ => {}
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
        }
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Enter => app.open_at_cursor(),
        KeyCode::Tab => app.toggle_view_mode(),
        KeyCode::Char('a') => {
            if let Some(id) = requested_selection(app) {
                app.accept_thread(&id);
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = requested_selection(app) {
                app.decline_thread(&id);
            }
        }
        KeyCode::Char('i') => {
            if app.selected_thread().is_some() {
                app.input_mode = InputMode::Composer;
            }
        }
        KeyCode::Char('x') => {
            app.show_quick_actions = false;
        }
        KeyCode::Char('m') => {
            if app.selected_thread().is_some() {
                app.modal_state = ModalState::OverflowMenu { selected: 0 };
            }
        }
        KeyCode::Char('c') => {
            app.modal_state = ModalState::Compose(ComposeState::new());
        }
        KeyCode::Char('u') => app.undo_from_toast(),
        KeyCode::Esc => {
            if app.current_notification().is_some() {
                app.dismiss_notification();
            } else {
                app.selected_thread_id = None;
            }
        }
        _ => {}
    }
}

/// The selected thread's id when it is still a request
fn requested_selection(app: &App) -> Option<String> {
    app.selected_thread()
        .filter(|t| t.state == ThreadState::Requested)
        .map(|t| t.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use authorly_core::models::ThreadState;
    use authorly_core::seed;
    use authorly_core::store::ThreadStore;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        let (threads, messages) = seed::builtin();
        App::new(ThreadStore::new(threads, messages))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn test_enter_on_unread_request_opens_preview_and_a_accepts() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.modal_state, ModalState::RequestPreview { .. }));

        press(&mut app, KeyCode::Char('a'));
        assert!(app.modal_state.is_none());
        assert_eq!(
            app.store.get_thread("thr-001").unwrap().state,
            ThreadState::Accepted
        );
    }

    #[test]
    fn test_preview_esc_leaves_thread_untouched() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert!(app.modal_state.is_none());

        let thread = app.store.get_thread("thr-001").unwrap();
        assert_eq!(thread.state, ThreadState::Requested);
        assert!(thread.unread);
    }

    #[test]
    fn test_ask_question_selects_without_state_change() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('i'));

        assert_eq!(app.selected_thread_id.as_deref(), Some("thr-001"));
        assert_eq!(app.input_mode, InputMode::Composer);
        assert_eq!(
            app.store.get_thread("thr-001").unwrap().state,
            ThreadState::Requested
        );
    }

    #[test]
    fn test_search_keystrokes_refilter_immediately() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);

        for c in "sarah".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.visible().len(), 1);

        press(&mut app, KeyCode::Esc);
        assert!(app.search_query.is_empty());
        assert!(app.visible().len() > 1);
    }

    #[test]
    fn test_overflow_menu_archives_selected_thread() {
        let mut app = app();
        app.select_thread("thr-002");
        press(&mut app, KeyCode::Char('m'));

        // thr-002 is accepted and active: first entry is Archive
        press(&mut app, KeyCode::Enter);
        assert!(app.modal_state.is_none());
        assert!(app.store.get_thread("thr-002").unwrap().archived);
        assert!(app.selected_thread_id.is_none());
    }

    #[test]
    fn test_compose_send_gated_until_valid() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Enter); // invalid: stays open
        assert!(matches!(app.modal_state, ModalState::Compose(_)));

        for c in "mwebb".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab); // focus body
        for c in "hello".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.modal_state.is_none());
        // No thread materialized - acknowledgement only
        assert_eq!(app.store.threads().len(), 6);
    }

    #[test]
    fn test_quick_action_keys_only_fire_on_requested_selection() {
        let mut app = app();
        app.select_thread("thr-002"); // accepted
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(
            app.store.get_thread("thr-002").unwrap().state,
            ThreadState::Accepted
        );
    }
}
