use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui;
use crate::ui::components::render_statusbar;
use crate::ui::layout;
use crate::ui::modal::ModalState;
use crate::ui::App;

pub(crate) fn render(f: &mut Frame, app: &App) {
    // Fill entire frame with app background (pure black)
    let bg_block = Block::default().style(Style::default().bg(ui::theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .split(f.area());

    let panes = Layout::horizontal([
        Constraint::Length(layout::LIST_PANE_WIDTH),
        Constraint::Min(0),
    ])
    .split(chunks[0]);

    ui::views::render_inbox_pane(f, app, panes[0]);
    ui::views::render_thread_pane(f, app, panes[1]);

    // Status bar at the very bottom (quit warning wins over toasts)
    if app.pending_quit {
        let warning = Paragraph::new(" ⚠ Press Ctrl+C again to quit").style(
            Style::default()
                .fg(ui::theme::ACCENT_ERROR)
                .bg(ui::theme::BG_SIDEBAR),
        );
        f.render_widget(warning, chunks[1]);
    } else {
        render_statusbar(f, chunks[1], app.current_notification(), &app.summary());
    }

    // Modal overlays render last, over everything
    match &app.modal_state {
        ModalState::None => {}
        ModalState::RequestPreview { thread_id } => {
            ui::views::render_request_preview(f, app, f.area(), thread_id)
        }
        ModalState::Compose(form) => ui::views::render_compose_modal(f, app, f.area(), form),
        ModalState::OverflowMenu { selected } => {
            ui::views::render_overflow_menu(f, app, f.area(), *selected)
        }
    }
}
