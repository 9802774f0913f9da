//! Route mounting, history and drawing

use std::io;

use ratatui::buffer::Buffer;
use tracing::debug;

use super::state::{App, Screen};
use crate::interfaces::tui::Tui;
use crate::interfaces::tui::ui::ui;
use crate::router::Route;

impl App {
    /// Draw one frame and return a copy of what was rendered
    pub fn draw(&self, terminal: &mut Tui) -> io::Result<Buffer> {
        let completed = terminal.draw(|f| ui(f, self))?;
        Ok(completed.buffer.clone())
    }

    /// Run the mount-time load of the current screen
    pub async fn mount_current(&mut self, terminal: &mut Tui) -> io::Result<()> {
        match &self.screen {
            Screen::List(_) => self.load_list(terminal).await,
            Screen::Detail(_) => self.load_detail(terminal).await,
            Screen::Create(_) | Screen::NotFound(_) => Ok(()),
        }
    }

    /// Push `path` onto the history and show it
    pub async fn navigate(&mut self, path: &str, terminal: &mut Tui) -> io::Result<()> {
        self.history.push(path);
        self.open(path, terminal).await
    }

    /// Show the previous history entry; no-op at the first entry
    pub async fn go_back(&mut self, terminal: &mut Tui) -> io::Result<()> {
        let Some(path) = self.history.back().map(str::to_owned) else {
            return Ok(());
        };
        self.open(&path, terminal).await
    }

    async fn open(&mut self, path: &str, terminal: &mut Tui) -> io::Result<()> {
        let route = Route::resolve(path);
        debug!("Opening {} -> {:?}", path, route);
        self.clear_messages();

        // 同为详情页时复用视图，仅在 slug 变化时重新加载
        if let Screen::Detail(view) = &mut self.screen
            && let Some(Route::Detail { slug }) = &route
        {
            if view.set_slug(slug.clone()) {
                return self.load_detail(terminal).await;
            }
            return Ok(());
        }

        // 替换即卸载：旧视图的定时任务随之取消
        self.screen = Screen::for_route(route, path);
        self.mount_current(terminal).await
    }

    pub async fn open_selected(&mut self, terminal: &mut Tui) -> io::Result<()> {
        let path = match &self.screen {
            Screen::List(view) => view
                .selected_record()
                .map(|record| Route::detail(record.slug.clone()).path()),
            _ => None,
        };
        match path {
            Some(path) => self.navigate(&path, terminal).await,
            None => Ok(()),
        }
    }
}
