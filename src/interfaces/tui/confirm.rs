//! Modal yes/no confirmation
//!
//! Owns the terminal while the question is open: the last rendered frame is
//! kept as background and the dialog is drawn over it until y/n is pressed.

use std::io;

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::warn;

use super::Tui;
use super::ui::draw_confirm_dialog;
use crate::views::Confirm;

pub struct TerminalConfirm<'a> {
    terminal: &'a mut Tui,
    background: Buffer,
}

impl<'a> TerminalConfirm<'a> {
    pub fn new(terminal: &'a mut Tui, background: Buffer) -> Self {
        Self {
            terminal,
            background,
        }
    }

    fn ask(&mut self, message: &str) -> io::Result<bool> {
        loop {
            let background = &self.background;
            self.terminal.draw(|frame| {
                frame.buffer_mut().merge(background);
                draw_confirm_dialog(frame, message);
            })?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return Ok(true),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return Ok(false),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(false);
                }
                _ => {}
            }
        }
    }
}

impl Confirm for TerminalConfirm<'_> {
    fn confirm(&mut self, message: &str) -> bool {
        match self.ask(message) {
            Ok(answer) => answer,
            Err(e) => {
                // 终端出错时按取消处理
                warn!("Confirm dialog failed: {}", e);
                false
            }
        }
    }
}
