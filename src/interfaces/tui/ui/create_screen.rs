use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::widgets::UrlInput;
use crate::interfaces::tui::constants::colors;
use crate::views::CreateView;

pub fn draw_create_screen(frame: &mut Frame, view: &CreateView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("URL Shortener")
        .title_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
    let inner = area.inner(Margin::new(2, 1));

    let input = UrlInput::new("Enter URL to shorten", view.input())
        .placeholder("https://...")
        .validation(view.validation_message())
        .busy(view.is_loading());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(input.height()), // URL input
            Constraint::Length(2),              // Submit button
            Constraint::Length(2),              // Request error
            Constraint::Min(3),                 // Result
        ])
        .split(inner);

    frame.render_widget(&input, chunks[0]);

    let button = if view.is_loading() {
        Span::styled(
            "[ Shortening... ]",
            Style::default().fg(colors::MUTED),
        )
    } else {
        Span::styled(
            "[ Shorten ]",
            Style::default()
                .fg(Color::Black)
                .bg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(button)), chunks[1]);

    if let Some(error) = view.error() {
        let error_text = Paragraph::new(format!("Error: {}", error))
            .style(Style::default().fg(colors::ERROR))
            .wrap(Wrap { trim: true });
        frame.render_widget(error_text, chunks[2]);
    }

    if let Some(created) = view.created() {
        let result = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                created.short_link.as_str(),
                Style::default()
                    .fg(colors::LINK)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press [Tab] to see all shortened URLs",
                Style::default().fg(colors::MUTED),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::SUCCESS))
                .title("Shortened URL"),
        );
        frame.render_widget(result, chunks[3]);
    }
}
