//! Event handling for TUI
//!
//! Translates key events into [`Action`]s; the App executes them.
//!
//! This module is organized by screen type:
//! - link_screens: Create, List, Detail
//! - misc_screens: NotFound

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::interfaces::tui::action::Action;
use crate::interfaces::tui::app::{App, Screen};

mod link_screens;
mod misc_screens;

use link_screens::*;
use misc_screens::*;

/// Handle keyboard input based on current screen
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    // Ctrl+C 在任何屏幕都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    // 请求进行中忽略输入
    if app.busy.is_some() {
        return Action::Noop;
    }

    match &app.screen {
        Screen::Create(view) => handle_create_screen(view, key),
        Screen::List(view) => handle_list_screen(view, key),
        Screen::Detail(view) => handle_detail_screen(view, key),
        Screen::NotFound(_) => handle_not_found_screen(key),
    }
}
