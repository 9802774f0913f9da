//! Event handlers for link-related screens
//!
//! Handles: Create, List, Detail

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::action::Action;
use crate::router::Route;
use crate::views::{CreateView, DetailView, ListView};

/// Handle create screen input
///
/// All printable keys go to the URL field, so navigation uses Tab / Esc.
pub fn handle_create_screen(view: &CreateView, key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => {
            if view.can_submit() {
                Action::Submit
            } else {
                Action::Noop
            }
        }
        KeyCode::Backspace => Action::DeleteChar,
        KeyCode::Char('u') if ctrl => Action::ClearInput,
        KeyCode::Char('l') if ctrl => Action::navigate(Route::List.path()),
        KeyCode::Tab => Action::navigate(Route::List.path()),
        KeyCode::Esc => Action::Quit,
        KeyCode::Char(c) if !ctrl => Action::InputChar(c),
        _ => Action::Noop,
    }
}

/// Handle list screen input
pub fn handle_list_screen(view: &ListView, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Enter | KeyCode::Char('v') => {
            if view.selected_record().is_some() {
                Action::OpenSelected
            } else {
                Action::Noop
            }
        }
        KeyCode::Left | KeyCode::Char('p') => Action::PreviousPage,
        KeyCode::Right | KeyCode::Char('n') => Action::NextPage,
        KeyCode::Char('d') | KeyCode::Delete => Action::DeleteSelected,
        KeyCode::Char('r') => Action::Reload,
        KeyCode::Char('c') | KeyCode::Char('a') => Action::navigate(Route::Create.path()),
        KeyCode::Esc | KeyCode::Char('b') => Action::GoBack,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Noop,
    }
}

/// Handle detail screen input
pub fn handle_detail_screen(_view: &DetailView, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('c') => Action::CopyShortLink,
        KeyCode::Char('d') | KeyCode::Delete => Action::DeleteCurrent,
        KeyCode::Char('r') => Action::Reload,
        KeyCode::Char('n') => Action::navigate(Route::Create.path()),
        KeyCode::Esc | KeyCode::Char('l') => Action::navigate(Route::List.path()),
        KeyCode::Char('b') => Action::GoBack,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Noop,
    }
}
