// Centralized layout constants and utilities for consistent UI across all views
// All layout-related values should be defined here for maintainability

use ratatui::layout::Rect;

/// Standard horizontal padding for main content areas (left + right)
pub const CONTENT_PADDING_H: u16 = 2;

/// Horizontal padding for modal content (left + right)
pub const MODAL_PADDING_H: u16 = 2;

/// Width of the thread list pane
pub const LIST_PANE_WIDTH: u16 = 46;

/// Tab bar height (tabs + search line)
pub const TAB_BAR_HEIGHT: u16 = 2;

/// Status bar height (single line at very bottom of app)
pub const STATUSBAR_HEIGHT: u16 = 1;

/// Default modal maximum width
pub const MODAL_DEFAULT_WIDTH: u16 = 64;

/// Default modal height as percentage of terminal
pub const MODAL_DEFAULT_HEIGHT_PERCENT: f32 = 0.6;

/// Apply horizontal padding to a Rect (reduces width and shifts x)
#[inline]
pub fn with_horizontal_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}

/// Apply content padding to a Rect (uses CONTENT_PADDING_H)
#[inline]
pub fn with_content_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, CONTENT_PADDING_H)
}

/// Apply modal padding to a Rect (uses MODAL_PADDING_H)
#[inline]
pub fn with_modal_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, MODAL_PADDING_H)
}
