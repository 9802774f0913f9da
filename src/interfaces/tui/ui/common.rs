use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, Screen};
use crate::interfaces::tui::constants::colors;

/// Draw title bar with version and current location
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bold = Modifier::BOLD;
    let title_text = vec![Line::from(vec![
        Span::styled(
            "Shortly",
            Style::default().fg(colors::PRIMARY).add_modifier(bold),
        ),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(
            format!("{} ", app.screen.title()),
            Style::default().fg(Color::White).add_modifier(bold),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
        Span::styled(
            app.current_path().to_string(),
            Style::default().fg(colors::WARNING),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if let Some(busy) = app.busy {
        (
            format!("[WORKING] {}", busy),
            Style::default()
                .fg(Color::Black)
                .bg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        )
    } else if !app.error_message.is_empty() {
        (
            format!("[ERROR] {}", app.error_message),
            Style::default()
                .fg(Color::White)
                .bg(colors::ERROR)
                .add_modifier(Modifier::BOLD),
        )
    } else if !app.status_message.is_empty() {
        (
            format!("[SUCCESS] {}", app.status_message),
            Style::default()
                .fg(Color::Black)
                .bg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            format!("Ready | {}", app.base_url),
            Style::default().fg(colors::PRIMARY),
        )
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match &app.screen {
        Screen::Create(_) => vec![
            ("Enter", "Shorten", Color::Green),
            ("Ctrl+U", "Clear", Color::Yellow),
            ("Tab", "All Links", Color::Cyan),
            ("Esc", "Quit", Color::Magenta),
        ],
        Screen::List(_) => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("Enter", "Details", Color::Cyan),
            ("Left/Right", "Page", Color::Cyan),
            ("d", "Delete", Color::Red),
            ("r", "Reload", Color::Yellow),
            ("c", "Create", Color::Green),
            ("q", "Quit", Color::Magenta),
        ],
        Screen::Detail(_) => vec![
            ("y", "Copy", Color::Green),
            ("d", "Delete", Color::Red),
            ("r", "Reload", Color::Yellow),
            ("Esc", "Back to list", Color::Cyan),
            ("n", "Create", Color::Green),
            ("q", "Quit", Color::Magenta),
        ],
        Screen::NotFound(_) => vec![
            ("Enter", "Home", Color::Green),
            ("l", "All Links", Color::Cyan),
            ("q", "Quit", Color::Magenta),
        ],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

/// Shorten `text` to at most `max` characters, marking the cut with "..."
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("https://a.io", 40), "https://a.io");
    }

    #[test]
    fn test_truncate_long_text() {
        let out = truncate("https://example.com/some/long/path", 15);
        assert_eq!(out, "https://exam...");
        assert_eq!(out.chars().count(), 15);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }
}
