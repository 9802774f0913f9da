use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};

use super::truncate;
use super::widgets::StatusIndicator;
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors};
use crate::views::{EMPTY_LIST_MESSAGE, LOADING_MESSAGE, ListBody, ListView};

const COLUMNS: [&str; 7] = [
    "Short Link",
    "Original URL",
    "Slug",
    "Visits",
    "Last Visit",
    "Active",
    "Actions",
];

pub fn draw_list_screen(frame: &mut Frame, view: &ListView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Table
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Action error
        ])
        .split(area);

    match view.body() {
        ListBody::Failed(error) => {
            draw_error_panel(frame, error, area);
            return;
        }
        ListBody::Loading => draw_message_table(frame, LOADING_MESSAGE, chunks[0]),
        ListBody::Empty => draw_message_table(frame, EMPTY_LIST_MESSAGE, chunks[0]),
        ListBody::Rows(_) => draw_table(frame, view, chunks[0]),
    }

    if view.show_pagination() {
        draw_pagination(frame, view, chunks[1]);
    }

    if let Some(error) = view.action_error() {
        let error_text =
            Paragraph::new(format!("Error: {}", error)).style(Style::default().fg(colors::ERROR));
        frame.render_widget(error_text, chunks[2]);
    }
}

fn table_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title("All Shortened URLs")
        .title_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
}

fn header() -> Row<'static> {
    Row::new(COLUMNS.iter().map(|name| {
        Cell::from(*name).style(
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        )
    }))
    .bottom_margin(1)
}

fn widths() -> [Constraint; 7] {
    [
        Constraint::Min(24),    // Short link
        Constraint::Min(20),    // Original URL
        Constraint::Length(10), // Slug
        Constraint::Length(7),  // Visits
        Constraint::Length(19), // Last visit
        Constraint::Length(12), // Active
        Constraint::Length(10), // Actions
    ]
}

/// Table with a single full-width message row (loading / empty)
fn draw_message_table(frame: &mut Frame, message: &str, area: Rect) {
    let row = Row::new(vec![Cell::from(Span::styled(
        message.to_string(),
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    ))]);
    let table = Table::new(vec![row], [Constraint::Percentage(100)])
        .header(header())
        .block(table_block());
    frame.render_widget(table, area);
}

fn draw_table(frame: &mut Frame, view: &ListView, area: Rect) {
    let rows = view.records().iter().map(|link| {
        Row::new(vec![
            Cell::from(Span::styled(
                link.shortened_link.clone(),
                Style::default()
                    .fg(colors::LINK)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            Cell::from(truncate(&link.original_url, URL_TRUNCATE_LENGTH)),
            Cell::from(Span::styled(
                link.slug.clone(),
                Style::default().fg(colors::PRIMARY),
            )),
            Cell::from(Span::styled(
                link.visits.to_string(),
                Style::default().fg(colors::SUCCESS),
            )),
            Cell::from(link.last_visit_display()),
            Cell::from(StatusIndicator::new(link.is_active).span()),
            Cell::from(Span::styled("[d] Delete", Style::default().fg(colors::ERROR))),
        ])
    });

    let table = Table::new(rows, widths())
        .header(header())
        .block(table_block())
        .row_highlight_style(Style::default().bg(colors::MUTED).fg(Color::White))
        .highlight_symbol("▶ ")
        .column_spacing(1);

    let mut state = TableState::default();
    state.select(view.selected_index());
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_pagination(frame: &mut Frame, view: &ListView, area: Rect) {
    let enabled = Style::default()
        .fg(colors::PRIMARY)
        .add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(colors::MUTED);
    let meta = view.meta();

    let line = Line::from(vec![
        Span::styled(
            "◀ Previous",
            if view.can_go_previous() { enabled } else { disabled },
        ),
        Span::raw(format!(
            "   Page {} of {}   ",
            meta.current_page, meta.total_pages
        )),
        Span::styled(
            "Next ▶",
            if view.can_go_next() { enabled } else { disabled },
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Fatal load error: replaces the whole table
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
            "Press [r] to retry or [c] to create a link",
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
                .title("All Shortened URLs"),
        );
    frame.render_widget(panel, area);
}
