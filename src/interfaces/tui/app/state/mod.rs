//! App state definition and basic state management

use crate::client::LinkClient;
use crate::interfaces::tui::clipboard::SystemClipboard;
use crate::router::{History, Route};
use crate::views::{CreateView, DetailView, ListView};

/// 当前屏幕（每个路由对应一个视图，切换路由即卸载旧视图）
#[derive(Debug)]
pub enum Screen {
    Create(CreateView),
    List(ListView),
    Detail(DetailView),
    /// 无匹配路由
    NotFound(String),
}

impl Screen {
    /// Fresh view for a resolved route
    pub fn for_route(route: Option<Route>, path: &str) -> Self {
        match route {
            Some(Route::Create) => Screen::Create(CreateView::new()),
            Some(Route::List) => Screen::List(ListView::new()),
            Some(Route::Detail { slug }) => Screen::Detail(DetailView::new(slug)),
            None => Screen::NotFound(path.to_string()),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Create(_) => Route::Create.title(),
            Screen::List(_) => Route::List.title(),
            Screen::Detail(_) => "Shortened URL Details",
            Screen::NotFound(_) => "Not Found",
        }
    }
}

pub struct App {
    pub client: LinkClient,
    pub base_url: String,
    pub history: History,
    pub screen: Screen,

    // UI state
    pub status_message: String,
    pub error_message: String,
    /// 请求进行中的提示（绘制后才发出请求）
    pub busy: Option<&'static str>,
    pub should_quit: bool,

    pub(crate) clipboard: SystemClipboard,
}

impl App {
    pub fn new(client: LinkClient, base_url: &str, initial_path: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            history: History::new(initial_path),
            screen: Screen::for_route(Route::resolve(initial_path), initial_path),
            status_message: String::new(),
            error_message: String::new(),
            busy: None,
            should_quit: false,
            clipboard: SystemClipboard::default(),
        }
    }

    pub fn set_status(&mut self, msg: String) {
        self.status_message = msg;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, msg: String) {
        self.error_message = msg;
        self.status_message.clear();
    }

    /// Mirror the current view's latest failure into the status bar
    pub fn report_view_error(&mut self, context: &str) {
        let message = match &self.screen {
            Screen::Create(view) => view.error(),
            Screen::List(view) => view.action_error().or(view.load_error()),
            Screen::Detail(view) => view.action_error().or(view.load_error()),
            Screen::NotFound(_) => None,
        };
        if let Some(message) = message {
            let message = format!("{}: {}", context, message);
            self.set_error(message);
        }
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
    }

    pub fn current_path(&self) -> &str {
        self.history.current()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::client::{ClientError, MockTransport};

    fn app_at(path: &str) -> App {
        let client = LinkClient::new(Arc::new(MockTransport::new()));
        App::new(client, "http://127.0.0.1:3000", path)
    }

    #[test]
    fn test_view_failure_replaces_stale_status() {
        let mut app = app_at("/links");
        app.set_status("Deleted abc".into());

        if let Screen::List(view) = &mut app.screen {
            view.begin_load();
            let _ = view.finish_load(Err(ClientError::Api {
                status: 500,
                message: Some("database down".into()),
            }));
        }
        app.report_view_error("Load failed");

        assert_eq!(app.error_message, "Load failed: database down");
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_no_view_failure_keeps_messages() {
        let mut app = app_at("/");
        app.set_status("Created https://short.ly/a".into());
        app.report_view_error("Create failed");

        assert!(app.error_message.is_empty());
        assert_eq!(app.status_message, "Created https://short.ly/a");
    }

    #[test]
    fn test_success_clears_error() {
        let mut app = app_at("/links/abc");
        app.set_error("Delete failed: Not found".into());
        app.set_status("Deleted abc".into());
        assert!(app.error_message.is_empty());
    }
}
