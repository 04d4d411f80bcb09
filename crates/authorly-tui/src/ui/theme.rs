// Centralized theme system for consistent UI styling
// All colors and styles are defined here - edit this file to change the look

use authorly_core::models::ThreadState;
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE - Muted, sophisticated colors inspired by modern terminal UIs
// =============================================================================

/// App background - pure black for contrast
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Selected item background - subtle highlight
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Sidebar/statusbar background - very dark, almost black
pub const BG_SIDEBAR: Color = Color::Rgb(12, 12, 12);

/// Input field background
pub const BG_INPUT: Color = Color::Rgb(18, 18, 18);

/// Modal background
pub const BG_MODAL: Color = Color::Rgb(16, 16, 18);

/// Overlay tint behind modals
pub const BG_MODAL_OVERLAY: Color = Color::Rgb(8, 8, 8);

// -----------------------------------------------------------------------------
// Text Colors
// -----------------------------------------------------------------------------

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints, placeholders
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

// -----------------------------------------------------------------------------
// Accent Colors - Muted, not harsh
// -----------------------------------------------------------------------------

/// Primary accent - muted blue (for interactive elements, focus)
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Success/positive - muted green
pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

/// Warning - muted amber/orange
pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

/// Error - muted red
pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

/// Special - muted purple (verification badges)
pub const ACCENT_SPECIAL: Color = Color::Rgb(169, 154, 203);

// -----------------------------------------------------------------------------
// Border Colors
// -----------------------------------------------------------------------------

/// Active/focused border
pub const BORDER_ACTIVE: Color = Color::Rgb(100, 100, 100);

/// Inactive border
pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

// =============================================================================
// SEMANTIC HELPERS
// =============================================================================

/// Color for a thread's lifecycle state tag
pub fn state_color(state: ThreadState) -> Color {
    match state {
        ThreadState::Requested => ACCENT_WARNING,
        ThreadState::Accepted => ACCENT_SUCCESS,
        ThreadState::InProgress => ACCENT_PRIMARY,
        ThreadState::Closed => TEXT_MUTED,
    }
}

/// Style for modal titles
pub fn modal_title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Style for modal hint text (right side of the header)
pub fn modal_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}
