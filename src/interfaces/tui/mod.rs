//! Terminal User Interface (TUI) module
//!
//! Renders the create / list / detail views in the terminal and drives them
//! from keyboard input. The terminal plays the role of the browser: paths are
//! resolved by the router and kept in a navigation history.

use std::io::{self, Stderr};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{error, info};

mod action;
mod app;
mod clipboard;
mod confirm;
mod constants;
mod event_handler;
mod ui;

use crate::client::LinkClient;
use crate::config::StaticConfig;
use crate::errors::Result;
use app::App;
use constants::TICK_RATE;

/// Terminal type used by the whole front end
pub(crate) type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI application, starting at `initial_path`
pub async fn run_tui(config: &StaticConfig, initial_path: &str) -> Result<()> {
    let client = LinkClient::from_config(&config.api);
    info!(
        "Starting TUI against {} at {}",
        config.api.base_url, initial_path
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new(client, &config.api.base_url, initial_path);
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("TUI exited with error: {}", err);
    }
    res.map_err(Into::into)
}

/// Main application loop
async fn run_app(terminal: &mut Tui, app: &mut App) -> io::Result<()> {
    app.mount_current(terminal).await?;

    loop {
        app.draw(terminal)?;
        if app.should_quit {
            return Ok(());
        }

        // 定时重绘，让 "Copied!" 等限时状态自然消失
        if !event::poll(TICK_RATE)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let action = event_handler::handle_key_event(app, key);
            if action.is_noop() {
                continue;
            }
            app.perform(action, terminal).await?;
        }
    }
}
