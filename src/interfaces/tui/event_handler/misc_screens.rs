//! Event handlers for miscellaneous screens

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::interfaces::tui::action::Action;
use crate::router::Route;

/// Handle the "no route" screen input
pub fn handle_not_found_screen(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Char('h') => Action::navigate(Route::Create.path()),
        KeyCode::Char('l') => Action::navigate(Route::List.path()),
        KeyCode::Char('b') => Action::GoBack,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        _ => Action::Noop,
    }
}
