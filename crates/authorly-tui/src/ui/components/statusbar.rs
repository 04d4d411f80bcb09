// Global status bar component displayed at the very bottom of the app
// Shows the current toast on the left and a view summary on the right

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::truncate_to_width;
use crate::ui::notifications::{Notification, NotificationLevel};
use crate::ui::theme;

/// Minimum width reserved for the summary column
const SUMMARY_COLUMN_MIN_WIDTH: u16 = 18;

/// Render the status bar: toast (left) and view summary like
/// "Inbox · 2 unread" (right).
pub fn render_statusbar(
    f: &mut Frame,
    area: Rect,
    current_notification: Option<&Notification>,
    summary: &str,
) {
    let summary_label = format!("{} ", summary);
    let summary_width =
        ((summary_label.width() + 1).max(SUMMARY_COLUMN_MIN_WIDTH as usize)) as u16;

    let chunks = Layout::horizontal([
        Constraint::Min(0),                  // Toast (fills remaining space)
        Constraint::Length(summary_width),   // Summary (sized to content)
    ])
    .split(area);

    let toast_area = chunks[0];
    let summary_area = chunks[1];

    let toast_paragraph = if let Some(notification) = current_notification {
        let (icon, color) = match notification.level {
            NotificationLevel::Info => ("\u{2139}", theme::ACCENT_PRIMARY), // ℹ
            NotificationLevel::Success => ("\u{2713}", theme::ACCENT_SUCCESS), // ✓
            NotificationLevel::Warning => ("\u{26A0}", theme::ACCENT_WARNING), // ⚠
            NotificationLevel::Error => ("\u{2717}", theme::ACCENT_ERROR),  // ✗
        };

        let mut text = notification.message.clone();
        if notification.offers_undo {
            text.push_str(" · u to undo");
        }

        let icon_width = icon.width() + 2;
        let available = (toast_area.width as usize).saturating_sub(icon_width);
        let message = truncate_to_width(&text, available);

        let spans = vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(color)),
            Span::styled(message, Style::default().fg(color)),
        ];
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::BG_SIDEBAR))
    } else {
        Paragraph::new("").style(Style::default().bg(theme::BG_SIDEBAR))
    };

    f.render_widget(toast_paragraph, toast_area);

    // Right-align the summary within its column
    let padding = (summary_area.width as usize).saturating_sub(summary_label.width());
    let padded = format!("{}{}", " ".repeat(padding), summary_label);
    let summary_paragraph =
        Paragraph::new(padded).style(Style::default().fg(theme::TEXT_MUTED).bg(theme::BG_SIDEBAR));

    f.render_widget(summary_paragraph, summary_area);
}
