//! Link operations
//!
//! Every request follows the same shape: enter the view's in-flight state,
//! draw once so it is visible, await the call, then hand the result back to
//! the view.

use std::io;
use std::time::Duration;

use ratatui::crossterm::event;
use tracing::debug;

use super::state::{App, Screen};
use crate::interfaces::tui::Tui;
use crate::interfaces::tui::action::Action;
use crate::interfaces::tui::confirm::TerminalConfirm;

impl App {
    /// Execute one action
    pub async fn perform(&mut self, action: Action, terminal: &mut Tui) -> io::Result<()> {
        match action {
            Action::Noop => {}
            Action::Quit => self.should_quit = true,
            Action::Navigate(path) => self.navigate(&path, terminal).await?,
            Action::GoBack => self.go_back(terminal).await?,
            Action::MoveUp => {
                if let Screen::List(view) = &mut self.screen {
                    view.select_previous();
                }
            }
            Action::MoveDown => {
                if let Screen::List(view) = &mut self.screen {
                    view.select_next();
                }
            }
            Action::OpenSelected => self.open_selected(terminal).await?,
            Action::PreviousPage => {
                if let Screen::List(view) = &mut self.screen
                    && view.previous_page()
                {
                    self.load_list(terminal).await?;
                }
            }
            Action::NextPage => {
                if let Screen::List(view) = &mut self.screen
                    && view.next_page()
                {
                    self.load_list(terminal).await?;
                }
            }
            Action::Reload => {
                self.clear_messages();
                self.mount_current(terminal).await?;
            }
            Action::InputChar(c) => {
                if let Screen::Create(view) = &mut self.screen {
                    view.push_char(c);
                }
            }
            Action::DeleteChar => {
                if let Screen::Create(view) = &mut self.screen {
                    view.pop_char();
                }
            }
            Action::ClearInput => {
                if let Screen::Create(view) = &mut self.screen {
                    view.clear_input();
                }
            }
            Action::Submit => self.submit_create(terminal).await?,
            Action::DeleteSelected => self.delete_selected(terminal).await?,
            Action::DeleteCurrent => self.delete_current(terminal).await?,
            Action::CopyShortLink => self.copy_short_link(),
        }
        Ok(())
    }

    pub async fn submit_create(&mut self, terminal: &mut Tui) -> io::Result<()> {
        let Screen::Create(view) = &mut self.screen else {
            return Ok(());
        };
        let url = match view.begin_submit() {
            Ok(url) => url,
            Err(e) => {
                debug!("Submit blocked: {}", e);
                return Ok(());
            }
        };

        self.busy = Some("Shortening...");
        self.draw(terminal)?;
        let result = self.client.create_link(&url).await;
        self.end_busy()?;

        let outcome = match &mut self.screen {
            Screen::Create(view) => Some(view.finish_submit(result)),
            _ => None,
        };
        match outcome {
            Some(Ok(created)) => self.set_status(format!("Created {}", created.short_link)),
            Some(Err(_)) => self.report_view_error("Create failed"),
            None => {}
        }
        Ok(())
    }

    pub async fn load_list(&mut self, terminal: &mut Tui) -> io::Result<()> {
        let Screen::List(view) = &mut self.screen else {
            return Ok(());
        };
        let page = view.begin_load();

        self.busy = Some("Loading...");
        self.draw(terminal)?;
        let result = self.client.list_links(page).await;
        self.end_busy()?;

        if let Screen::List(view) = &mut self.screen
            && view.finish_load(result).is_err()
        {
            self.report_view_error("Load failed");
        }
        Ok(())
    }

    pub async fn load_detail(&mut self, terminal: &mut Tui) -> io::Result<()> {
        let Screen::Detail(view) = &mut self.screen else {
            return Ok(());
        };
        let slug = view.begin_load();

        self.busy = Some("Loading...");
        self.draw(terminal)?;
        let result = self.client.get_link(&slug).await;
        self.end_busy()?;

        if let Screen::Detail(view) = &mut self.screen
            && view.finish_load(&slug, result).is_err()
        {
            self.report_view_error("Load failed");
        }
        Ok(())
    }

    pub async fn delete_selected(&mut self, terminal: &mut Tui) -> io::Result<()> {
        let background = self.draw(terminal)?;
        let Screen::List(view) = &mut self.screen else {
            return Ok(());
        };
        let Some(slug) = view.selected_record().map(|r| r.slug.clone()) else {
            return Ok(());
        };
        let mut confirm = TerminalConfirm::new(terminal, background);
        if !view.begin_delete(&slug, &mut confirm) {
            return Ok(());
        }

        self.busy = Some("Deleting...");
        self.draw(terminal)?;
        let result = self.client.delete_link(&slug).await;
        self.end_busy()?;

        let deleted = match &mut self.screen {
            Screen::List(view) => view.finish_delete(&slug, result),
            _ => false,
        };
        if deleted {
            self.set_status(format!("Deleted {}", slug));
            self.load_list(terminal).await?;
        } else {
            self.report_view_error("Delete failed");
        }
        Ok(())
    }

    pub async fn delete_current(&mut self, terminal: &mut Tui) -> io::Result<()> {
        let background = self.draw(terminal)?;
        let Screen::Detail(view) = &mut self.screen else {
            return Ok(());
        };
        let mut confirm = TerminalConfirm::new(terminal, background);
        let Some(slug) = view.begin_delete(&mut confirm) else {
            return Ok(());
        };

        self.busy = Some("Deleting...");
        self.draw(terminal)?;
        let result = self.client.delete_link(&slug).await;
        self.end_busy()?;

        let next = match &mut self.screen {
            Screen::Detail(view) => view.finish_delete(result),
            _ => None,
        };
        match next {
            Some(route) => {
                self.navigate(&route.path(), terminal).await?;
                self.set_status(format!("Deleted {}", slug));
            }
            None => self.report_view_error("Delete failed"),
        }
        Ok(())
    }

    /// Leave the in-flight state. Keys typed during the request are dropped
    /// rather than replayed, so a repeated Enter cannot fire a second call.
    fn end_busy(&mut self) -> io::Result<()> {
        let dropped = drain_input(|| event::poll(Duration::ZERO), || event::read().map(drop))?;
        if dropped > 0 {
            debug!("Discarded {} input events received while busy", dropped);
        }
        self.busy = None;
        Ok(())
    }

    pub fn copy_short_link(&mut self) {
        if let Screen::Detail(view) = &mut self.screen {
            view.copy_short_link(&mut self.clipboard);
        }
    }
}

/// Read and discard events while `poll` reports one ready; returns how many
fn drain_input(
    mut poll: impl FnMut() -> io::Result<bool>,
    mut read: impl FnMut() -> io::Result<()>,
) -> io::Result<usize> {
    let mut dropped = 0;
    while poll()? {
        read()?;
        dropped += 1;
    }
    Ok(dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_input_discards_everything_queued() {
        let queued = std::cell::Cell::new(3);
        let mut reads = 0;
        let dropped = drain_input(
            || Ok(queued.get() > 0),
            || {
                queued.set(queued.get() - 1);
                reads += 1;
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(dropped, 3);
        assert_eq!(reads, 3);
        assert_eq!(queued.get(), 0);
    }

    #[test]
    fn test_drain_input_with_nothing_queued() {
        let dropped = drain_input(|| Ok(false), || panic!("nothing to read")).unwrap();
        assert_eq!(dropped, 0);
    }

    #[test]
    fn test_drain_input_propagates_read_error() {
        let err = drain_input(
            || Ok(true),
            || Err(io::Error::other("terminal gone")),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "terminal gone");
    }
}
