//! Thread list pane: view-mode tabs, search input, and summary rows.

use authorly_core::models::{Thread, ViewMode};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::format::{truncate_to_width, truncate_with_ellipsis};
use crate::ui::{layout, theme, App, InputMode};

/// Rendered height of one list row (two content lines + spacer)
const ROW_HEIGHT: usize = 3;

pub fn render_inbox_pane(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(layout::TAB_BAR_HEIGHT),
        Constraint::Min(0),
    ])
    .split(area);

    render_tabs_and_search(f, app, chunks[0]);
    render_thread_rows(f, app, chunks[1]);
}

fn render_tabs_and_search(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

    // Tab line: Inbox / Archived with counts
    let padded = layout::with_content_padding(chunks[0]);
    let tab_span = |mode: ViewMode, count: usize| -> Span<'static> {
        let label = format!(" {} ({}) ", mode.label(), count);
        if app.view_mode == mode {
            Span::styled(
                label,
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .bg(theme::BG_SELECTED)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Style::default().fg(theme::TEXT_MUTED))
        }
    };
    let inbox_count = app
        .store
        .threads()
        .iter()
        .filter(|t| !t.archived)
        .count();
    let tabs = Line::from(vec![
        tab_span(ViewMode::Inbox, inbox_count),
        Span::raw(" "),
        tab_span(ViewMode::Archived, app.store.archived_count()),
    ]);
    f.render_widget(Paragraph::new(tabs), padded);

    // Search line
    let padded = layout::with_content_padding(chunks[1]);
    let (prefix, style) = if app.input_mode == InputMode::Search {
        ("/ ", Style::default().fg(theme::TEXT_PRIMARY).bg(theme::BG_INPUT))
    } else if app.search_query.is_empty() {
        ("/ search", Style::default().fg(theme::TEXT_DIM))
    } else {
        ("/ ", Style::default().fg(theme::TEXT_MUTED))
    };
    let text = if app.search_query.is_empty() && app.input_mode != InputMode::Search {
        prefix.to_string()
    } else {
        format!("{}{}", prefix, app.search_query)
    };
    f.render_widget(Paragraph::new(text).style(style), padded);
}

/// One thread as a two-line summary row
fn row_lines(thread: &Thread, width: usize, is_cursor: bool, is_selected: bool) -> Vec<Line<'static>> {
    let row_style = if is_cursor {
        Style::default().bg(theme::BG_SELECTED)
    } else {
        Style::default()
    };

    let marker = if thread.unread { "●" } else if is_selected { "▸" } else { " " };
    let marker_color = if thread.unread {
        theme::ACCENT_PRIMARY
    } else {
        theme::TEXT_DIM
    };

    let badge_count = thread.participant.verification.badge_count();
    let badges = if badge_count == 0 {
        String::new()
    } else {
        format!(" {}", "✓".repeat(badge_count))
    };
    // Display width of the badge suffix (checkmarks are multi-byte)
    let badges_width = if badge_count == 0 { 0 } else { badge_count + 1 };

    let timestamp = thread.timestamp.clone();
    let name_width = width
        .saturating_sub(2 + badges_width + timestamp.len() + 2)
        .max(8);
    let name = truncate_with_ellipsis(&thread.participant.name, name_width);
    let gap = width
        .saturating_sub(2 + name.chars().count() + badges_width + timestamp.len())
        .max(1);

    let first = Line::from(vec![
        Span::styled(format!("{} ", marker), Style::default().fg(marker_color)),
        Span::styled(
            name,
            if thread.unread {
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::TEXT_PRIMARY)
            },
        ),
        Span::styled(badges, Style::default().fg(theme::ACCENT_SPECIAL)),
        Span::raw(" ".repeat(gap)),
        Span::styled(timestamp, Style::default().fg(theme::TEXT_DIM)),
    ])
    .style(row_style);

    let tags = format!("[{}] [{}] ", thread.intent.label(), thread.state.label());
    let preview_width = width.saturating_sub(2 + tags.len());
    let preview = truncate_to_width(&thread.preview, preview_width);
    let second = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("[{}] ", thread.intent.label()),
            Style::default().fg(theme::ACCENT_PRIMARY),
        ),
        Span::styled(
            format!("[{}] ", thread.state.label()),
            Style::default().fg(theme::state_color(thread.state)),
        ),
        Span::styled(preview, Style::default().fg(theme::TEXT_MUTED)),
    ])
    .style(row_style);

    vec![first, second, Line::default().style(row_style)]
}

fn render_thread_rows(f: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible();

    if visible.is_empty() {
        let message = if app.search_query.is_empty() {
            match app.view_mode {
                ViewMode::Inbox => "No conversations",
                ViewMode::Archived => "Nothing archived",
            }
        } else {
            "No matches"
        };
        let empty = Paragraph::new(message).style(Style::default().fg(theme::TEXT_MUTED));
        f.render_widget(empty, layout::with_content_padding(area));
        return;
    }

    let cursor = app.clamped_cursor();
    let rows_fit = (area.height as usize / ROW_HEIGHT).max(1);

    // Keep the cursor row inside the window
    let first_row = if cursor >= rows_fit {
        cursor + 1 - rows_fit
    } else {
        0
    };

    let width = area.width.saturating_sub(layout::CONTENT_PADDING_H * 2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, thread) in visible.iter().enumerate().skip(first_row).take(rows_fit) {
        let is_cursor = i == cursor;
        let is_selected = app.selected_thread_id.as_deref() == Some(thread.id.as_str());
        lines.extend(row_lines(thread, width, is_cursor, is_selected));
    }

    let list = Paragraph::new(lines);
    f.render_widget(list, layout::with_content_padding(area));
}
