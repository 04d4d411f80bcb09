//! Modal overlays: request preview (the decision flow), compose, and the
//! overflow menu.

use authorly_core::models::Thread;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::components::{render_modal_header, render_modal_scaffold};
use crate::ui::format::wrap_text;
use crate::ui::modal::{ComposeField, ComposeState, OverflowAction};
use crate::ui::{layout, theme, App};

/// Decision preview for an unread requested thread. Shown instead of the
/// detail view until the unread/state combination changes.
pub fn render_request_preview(f: &mut Frame, app: &App, terminal_area: Rect, thread_id: &str) {
    let Some(thread) = app.store.get_thread(thread_id) else {
        return;
    };

    let area = render_modal_scaffold(
        f,
        terminal_area,
        layout::MODAL_DEFAULT_WIDTH,
        layout::MODAL_DEFAULT_HEIGHT_PERCENT,
    );
    let body = render_modal_header(f, area, "New request", "a accept · d decline · i ask · esc");
    let padded = layout::with_modal_padding(body);

    let mut lines = participant_lines(thread);

    lines.push(Line::default());
    for (label, value) in thread.fields.defined() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<9}", label), Style::default().fg(theme::TEXT_MUTED)),
            Span::styled(value.to_string(), Style::default().fg(theme::TEXT_PRIMARY)),
        ]));
    }

    lines.push(Line::default());
    for wrapped in wrap_text(&thread.preview, padded.width.saturating_sub(1) as usize) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default().fg(theme::TEXT_PRIMARY),
        )));
    }

    f.render_widget(Paragraph::new(lines), padded);
}

fn participant_lines(thread: &Thread) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                thread.participant.name.clone(),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  @{} · {}", thread.participant.handle, thread.participant.location()),
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]),
        Line::from(Span::styled(
            format!("[{}]", thread.intent.label()),
            Style::default().fg(theme::ACCENT_PRIMARY),
        )),
    ];

    let verification = &thread.participant.verification;
    let mut badges: Vec<String> = Vec::new();
    if verification.domain_verified {
        badges.push("✓ domain".to_string());
    }
    if let Some(ref isni) = verification.isni {
        badges.push(format!("✓ ISNI {}", isni));
    }
    if let Some(ref orcid) = verification.orcid {
        badges.push(format!("✓ ORCID {}", orcid));
    }
    if !badges.is_empty() {
        lines.push(Line::from(Span::styled(
            badges.join("  "),
            Style::default().fg(theme::ACCENT_SPECIAL),
        )));
    }
    lines
}

/// Compose form. Send stays disabled until the form validates; at the send
/// limit the gate explains itself instead of failing.
pub fn render_compose_modal(f: &mut Frame, app: &App, terminal_area: Rect, form: &ComposeState) {
    let area = render_modal_scaffold(
        f,
        terminal_area,
        layout::MODAL_DEFAULT_WIDTH,
        layout::MODAL_DEFAULT_HEIGHT_PERCENT,
    );
    let body = render_modal_header(f, area, "New message", "tab fields · enter send · esc");
    let padded = layout::with_modal_padding(body);

    let field_line = |label: &str, value: &str, field: ComposeField| -> Line<'static> {
        let focused = form.focus == field;
        let label_style = if focused {
            Style::default().fg(theme::ACCENT_PRIMARY)
        } else {
            Style::default().fg(theme::TEXT_MUTED)
        };
        let value_style = if focused {
            Style::default().fg(theme::TEXT_PRIMARY).bg(theme::BG_INPUT)
        } else {
            Style::default().fg(theme::TEXT_PRIMARY)
        };
        let cursor = if focused { "▌" } else { "" };
        Line::from(vec![
            Span::styled(format!("{:<10}", label), label_style),
            Span::styled(format!("{}{}", value, cursor), value_style),
        ])
    };

    let mut lines = vec![
        field_line("To", &form.recipient, ComposeField::Recipient),
        Line::default(),
        field_line("Subject", &form.subject, ComposeField::Subject),
        Line::default(),
        field_line("Message", &form.body, ComposeField::Body),
        Line::default(),
    ];

    let gate = if let Some(hint) = app.composer_disabled_hint() {
        Span::styled(format!("✗ {}", hint), Style::default().fg(theme::ACCENT_WARNING))
    } else if form.is_valid() {
        Span::styled("enter to send", Style::default().fg(theme::ACCENT_SUCCESS))
    } else {
        Span::styled(
            "recipient and message are required",
            Style::default().fg(theme::TEXT_DIM),
        )
    };
    lines.push(Line::from(gate));

    f.render_widget(Paragraph::new(lines), padded);
}

/// Overflow menu over the selected thread
pub fn render_overflow_menu(f: &mut Frame, app: &App, terminal_area: Rect, selected: usize) {
    let Some(thread) = app.selected_thread() else {
        return;
    };
    let actions = OverflowAction::for_thread(thread);

    let area = render_modal_scaffold(f, terminal_area, 36, 0.5);
    let body = render_modal_header(f, area, "Actions", "enter · esc");
    let padded = layout::with_modal_padding(body);

    let chunks = Layout::vertical([Constraint::Min(0)]).split(padded);
    let lines: Vec<Line> = actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            if i == selected {
                Line::from(Span::styled(
                    format!("▸ {}", action.label()),
                    Style::default()
                        .fg(theme::TEXT_PRIMARY)
                        .bg(theme::BG_SELECTED),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", action.label()),
                    Style::default().fg(theme::TEXT_MUTED),
                ))
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines), chunks[0]);
}
