use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::widgets::StatusIndicator;
use crate::interfaces::tui::constants::colors;
use crate::models::ShortLink;
use crate::views::{DetailBody, DetailView, LOADING_MESSAGE};

pub fn draw_detail_screen(frame: &mut Frame, view: &DetailView, area: Rect) {
    match view.body() {
        DetailBody::Failed(error) => draw_error_panel(frame, error, area),
        DetailBody::Loading => {
            let loading = Paragraph::new(LOADING_MESSAGE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray))
                .block(detail_block(view.slug()));
            frame.render_widget(loading, area);
        }
        DetailBody::Loaded(record) => draw_record(frame, view, record, area),
    }
}

fn detail_block(slug: &str) -> Block<'static> {
    Block::default()
        .title(format!("Shortened URL Details: {}", slug))
        .title_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::PRIMARY))
}

fn label(text: &str) -> Span<'_> {
    Span::styled(
        text,
        Style::default()
            .fg(colors::WARNING)
            .add_modifier(Modifier::BOLD),
    )
}

fn draw_record(frame: &mut Frame, view: &DetailView, record: &ShortLink, area: Rect) {
    frame.render_widget(detail_block(view.slug()), area);
    let inner = area.inner(Margin::new(2, 1));

    let copy_hint = if view.is_copied() {
        Span::styled(
            "  Copied!",
            Style::default()
                .fg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("  [y] Copy", Style::default().fg(colors::MUTED))
    };

    let mut details = vec![
        Line::from(""),
        Line::from(label("Original URL:")),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(&record.original_url, Style::default().fg(colors::LINK)),
        ]),
        Line::from(""),
        Line::from(label("Short Link:")),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                &record.shortened_link,
                Style::default()
                    .fg(colors::LINK)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            copy_hint,
        ]),
        Line::from(""),
        Line::from(vec![
            label("Slug:        "),
            Span::styled(&record.slug, Style::default().fg(colors::PRIMARY)),
        ]),
        Line::from(vec![
            label("Visits:      "),
            Span::styled(
                record.visits.to_string(),
                Style::default()
                    .fg(colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Last Visit:  "),
            Span::styled(record.last_visit_display(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            label("Status:      "),
            StatusIndicator::new(record.is_active).span(),
        ]),
        Line::from(""),
    ];

    if view.is_deleting() {
        details.push(Line::from(Span::styled(
            "Deleting...",
            Style::default().fg(colors::WARNING),
        )));
    }
    if let Some(error) = view.action_error() {
        details.push(Line::from(Span::styled(
            format!("Error: {}", error),
            Style::default().fg(colors::ERROR),
        )));
    }

    let paragraph = Paragraph::new(details).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Fatal load error: replaces the whole view
fn draw_error_panel(frame: &mut Frame, error: &str, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Error: {}", error),
            Style::default()
                .fg(colors::ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press [Esc] to go back to the list or [r] to retry",
            Style::default().fg(colors::MUTED),
        )),
    ];
    let panel = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::ERROR))
                .title("Shortened URL Details"),
        );
    frame.render_widget(panel, area);
}
