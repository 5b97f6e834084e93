//! TUI color semantics and style constants.
//!
//! Centralized theme definitions — pure data, consumed by the rendering
//! layer for visual consistency.
//!
//! Color semantics:
//! - Die colors follow the physical game: Agility magenta, Strength yellow,
//!   Magic blue. Heroic dice are black in the box; terminals draw them white
//!   so they stay legible on dark backgrounds.
//! - Cyan: interactive elements (keybinding hints, roll affordance)
//! - Dim: de-emphasized (totals, empty-state notes)
//! - Bold: important (counts, faces)

use ratatui::style::{Color, Modifier, Style};

use crate::types::DieColor;

// ============================================================================
// DIE COLORS
// ============================================================================

/// Display style for a die category.
pub fn die_style(color: DieColor) -> Style {
    match color {
        DieColor::Agility => Style::new().fg(Color::Magenta),
        DieColor::Strength => Style::new().fg(Color::Yellow),
        DieColor::Magic => Style::new().fg(Color::Blue),
        DieColor::Heroic => Style::new().fg(Color::White),
    }
}

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized metadata — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Cursor row in a list.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
