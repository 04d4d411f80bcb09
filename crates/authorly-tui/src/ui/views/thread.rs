//! Thread detail pane: header, state-conditional action chrome, the
//! conversation, and the composer.

use authorly_core::constants::SELF_DISPLAY_NAME;
use authorly_core::models::{Message, Thread, ThreadState};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::format::wrap_text;
use crate::ui::{layout, theme, App, InputMode};

const HEADER_HEIGHT: u16 = 4;
const COMPOSER_HEIGHT: u16 = 2;

pub fn render_thread_pane(f: &mut Frame, app: &App, area: Rect) {
    let Some(thread) = app.selected_thread() else {
        let hint = Paragraph::new("Select a conversation · Enter opens · c composes")
            .style(Style::default().fg(theme::TEXT_DIM));
        f.render_widget(hint, layout::with_content_padding(area));
        return;
    };

    let action_bar_height = if thread.state == ThreadState::Accepted { 1 } else { 0 };
    let quick_actions_height =
        if thread.state == ThreadState::Requested && app.show_quick_actions { 2 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(action_bar_height),
        Constraint::Length(quick_actions_height),
        Constraint::Min(0),
        Constraint::Length(COMPOSER_HEIGHT),
    ])
    .split(area);

    render_header(f, thread, chunks[0]);
    if action_bar_height > 0 {
        render_action_bar(f, chunks[1]);
    }
    if quick_actions_height > 0 {
        render_quick_actions(f, chunks[2]);
    }
    render_messages(f, thread, app.store.messages(&thread.id), chunks[3]);
    render_composer(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, thread: &Thread, area: Rect) {
    let padded = layout::with_content_padding(area);

    let mut name_spans = vec![Span::styled(
        thread.participant.name.clone(),
        Style::default()
            .fg(theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )];
    name_spans.push(Span::styled(
        format!("  @{}", thread.participant.handle),
        Style::default().fg(theme::TEXT_MUTED),
    ));
    if thread.archived {
        name_spans.push(Span::styled(
            "  [archived]",
            Style::default().fg(theme::TEXT_DIM),
        ));
    }

    let verification = &thread.participant.verification;
    let mut badge_parts: Vec<String> = Vec::new();
    if verification.domain_verified {
        badge_parts.push("✓ domain".to_string());
    }
    if let Some(ref isni) = verification.isni {
        badge_parts.push(format!("✓ ISNI {}", isni));
    }
    if let Some(ref orcid) = verification.orcid {
        badge_parts.push(format!("✓ ORCID {}", orcid));
    }
    let badges_line = if badge_parts.is_empty() {
        Line::from(Span::styled(
            "unverified",
            Style::default().fg(theme::TEXT_DIM),
        ))
    } else {
        Line::from(Span::styled(
            badge_parts.join("  "),
            Style::default().fg(theme::ACCENT_SPECIAL),
        ))
    };

    let lines = vec![
        Line::from(name_spans),
        Line::from(vec![
            Span::styled(
                thread.participant.location(),
                Style::default().fg(theme::TEXT_MUTED),
            ),
            Span::styled(
                format!("  [{}]", thread.intent.label()),
                Style::default().fg(theme::ACCENT_PRIMARY),
            ),
            Span::styled(
                format!(" [{}]", thread.state.label()),
                Style::default().fg(theme::state_color(thread.state)),
            ),
        ]),
        badges_line,
    ];
    f.render_widget(Paragraph::new(lines), padded);
}

/// Accepted threads only: next-step triggers. Acknowledgement-only in this
/// build - wiring them to real flows is an external concern.
fn render_action_bar(f: &mut Frame, area: Rect) {
    let bar = Line::from(vec![
        Span::styled("[B]", Style::default().fg(theme::ACCENT_PRIMARY)),
        Span::styled(" Create brief  ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled("[T]", Style::default().fg(theme::ACCENT_PRIMARY)),
        Span::styled(" Propose time  ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled("[F]", Style::default().fg(theme::ACCENT_PRIMARY)),
        Span::styled(" Share files", Style::default().fg(theme::TEXT_MUTED)),
    ]);
    f.render_widget(Paragraph::new(bar), layout::with_content_padding(area));
}

/// Requested threads only, dismissible with x independent of thread state
fn render_quick_actions(f: &mut Frame, area: Rect) {
    let strip = Line::from(vec![
        Span::styled("[a]", Style::default().fg(theme::ACCENT_SUCCESS)),
        Span::styled(" Accept  ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled("[d]", Style::default().fg(theme::ACCENT_ERROR)),
        Span::styled(" Decline  ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled("[i]", Style::default().fg(theme::ACCENT_PRIMARY)),
        Span::styled(" Ask a question  ", Style::default().fg(theme::TEXT_MUTED)),
        Span::styled("[x]", Style::default().fg(theme::TEXT_DIM)),
        Span::styled(" dismiss", Style::default().fg(theme::TEXT_DIM)),
    ]);
    f.render_widget(Paragraph::new(strip), layout::with_content_padding(area));
}

fn message_lines(message: &Message, thread: &Thread, width: usize) -> Vec<Line<'static>> {
    let (author, color) = if message.is_from_user() {
        (SELF_DISPLAY_NAME.to_string(), theme::ACCENT_PRIMARY)
    } else {
        (thread.participant.name.clone(), theme::ACCENT_SPECIAL)
    };

    let mut meta = vec![
        Span::styled(author, Style::default().fg(color)),
        Span::styled(
            format!(" · {}", message.timestamp),
            Style::default().fg(theme::TEXT_DIM),
        ),
    ];
    // Read receipts are only meaningful once the thread left requested
    if thread.state != ThreadState::Requested {
        if let Some(read) = message.read {
            meta.push(Span::styled(
                if read { " · read" } else { " · sent" },
                Style::default().fg(theme::TEXT_DIM),
            ));
        }
    }

    let mut lines = vec![Line::from(meta)];
    for wrapped in wrap_text(&message.content, width.max(8)) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default().fg(theme::TEXT_PRIMARY),
        )));
    }
    lines.push(Line::default());
    lines
}

fn render_messages(f: &mut Frame, thread: &Thread, messages: &[Message], area: Rect) {
    let padded = layout::with_content_padding(area);
    let width = padded.width as usize;

    let mut lines: Vec<Line> = Vec::new();
    for message in messages {
        lines.extend(message_lines(message, thread, width));
    }

    // Bottom-anchored: show the most recent conversation tail
    let height = padded.height as usize;
    if lines.len() > height {
        lines.drain(0..lines.len() - height);
    }

    f.render_widget(Paragraph::new(lines), padded);
}

fn render_composer(f: &mut Frame, app: &App, area: Rect) {
    let padded = layout::with_content_padding(area);
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(padded);

    let line = if let Some(hint) = app.composer_disabled_hint() {
        // Disabled control with an explanation, not a failure
        Line::from(Span::styled(
            format!("✗ {}", hint),
            Style::default().fg(theme::ACCENT_WARNING),
        ))
    } else if app.input_mode == InputMode::Composer {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(theme::ACCENT_PRIMARY)),
            Span::styled(
                app.composer_input.clone(),
                Style::default().fg(theme::TEXT_PRIMARY).bg(theme::BG_INPUT),
            ),
            Span::styled("▌", Style::default().fg(theme::ACCENT_PRIMARY)),
        ])
    } else {
        Line::from(Span::styled(
            "i to reply · a/d accept/decline · m more",
            Style::default().fg(theme::TEXT_DIM),
        ))
    };
    f.render_widget(Paragraph::new(line), chunks[0]);
}
