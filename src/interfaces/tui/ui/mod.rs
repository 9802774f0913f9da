// UI submodules
mod common;
mod confirm_dialog;
mod create_screen;
mod detail_screen;
mod list_screen;
mod not_found;
pub mod widgets;

// Re-export common utilities
pub use common::{draw_footer, draw_status_bar, draw_title_bar, truncate};

// Re-export screen drawing functions
pub use confirm_dialog::draw_confirm_dialog;
pub use create_screen::draw_create_screen;
pub use detail_screen::draw_detail_screen;
pub use list_screen::draw_list_screen;
pub use not_found::draw_not_found_screen;

use super::app::{App, Screen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    // Main content based on current screen
    match &app.screen {
        Screen::Create(view) => draw_create_screen(frame, view, main_chunks[1]),
        Screen::List(view) => draw_list_screen(frame, view, main_chunks[1]),
        Screen::Detail(view) => draw_detail_screen(frame, view, main_chunks[1]),
        Screen::NotFound(path) => draw_not_found_screen(frame, path, main_chunks[1]),
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
