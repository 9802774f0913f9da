//! TUI 常量：尺寸、刷新节奏、配色

use std::time::Duration;

/// Original URLs longer than this are cut in the list table
pub const URL_TRUNCATE_LENGTH: usize = 40;

/// Redraw interval while no key is pressed, so timed states ("Copied!") expire
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Delete confirmation size as (width %, height %) of the terminal
pub const CONFIRM_DIALOG_PERCENT: (u16, u16) = (60, 35);

/// 配色
pub mod colors {
    use ratatui::style::Color;

    /// Borders, titles, slugs
    pub const PRIMARY: Color = Color::Cyan;
    /// Visits, "Copied!", enabled buttons
    pub const SUCCESS: Color = Color::Green;
    /// Field labels, busy status
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    /// Hints and disabled controls
    pub const MUTED: Color = Color::DarkGray;
    /// Short links and original URLs
    pub const LINK: Color = Color::Blue;
    /// Focused input border
    pub const FOCUS_BG: Color = Color::Yellow;
    pub const FOCUS_FG: Color = Color::Black;
}
