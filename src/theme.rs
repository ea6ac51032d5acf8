//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors used by the checkbox form so the
//! presentation stays visually consistent.

use ratatui::style::Color;

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Highlight color for the focused row
    pub const SECONDARY: Color = Color::Cyan;

    /// Accent color for checked options
    pub const SUCCESS: Color = Color::Green;

    /// Background for the focused row
    pub const INFO: Color = Color::Blue;
}
