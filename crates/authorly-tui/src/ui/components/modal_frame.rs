use crate::ui::layout;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
    Frame,
};

/// Dims everything behind a modal by restyling the existing cells
struct DimOverlay;

impl Widget for DimOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(
                        Style::default()
                            .add_modifier(Modifier::DIM)
                            .bg(theme::BG_MODAL_OVERLAY),
                    );
                }
            }
        }
    }
}

/// Dim the frame, clear a centered popup area and fill it with the modal
/// background. Returns the popup area.
pub fn render_modal_scaffold(
    f: &mut Frame,
    terminal_area: Rect,
    max_width: u16,
    height_percent: f32,
) -> Rect {
    f.render_widget(DimOverlay, terminal_area);

    let width = max_width.min(terminal_area.width.saturating_sub(4));
    let height = (terminal_area.height as f32 * height_percent) as u16;
    let x = terminal_area.x + (terminal_area.width.saturating_sub(width)) / 2;
    let y = terminal_area.y + (terminal_area.height.saturating_sub(height)) / 2;
    let area = Rect::new(x, y, width, height);

    f.render_widget(Clear, area);
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BG_MODAL)),
        area,
    );
    area
}

/// Render modal header with title on left and hint on right.
/// Returns the remaining area below the header.
pub fn render_modal_header(f: &mut Frame, area: Rect, title: &str, hint: &str) -> Rect {
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);

    let header_area = layout::with_modal_padding(chunks[0]);
    let spacing = (header_area.width as usize).saturating_sub(title.len() + hint.len());

    let header_line = Line::from(vec![
        Span::styled(title, theme::modal_title()),
        Span::raw(" ".repeat(spacing)),
        Span::styled(hint, theme::modal_hint()),
    ]);
    f.render_widget(Paragraph::new(header_line), header_area);

    chunks[1]
}
