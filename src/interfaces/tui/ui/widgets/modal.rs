//! Centered modal frame drawn over whatever is already on screen

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Clear},
};

use crate::interfaces::tui::constants::colors;

pub struct Modal<'a> {
    title: &'a str,
    accent: Color,
    /// (width %, height %) of the surrounding area
    percent: (u16, u16),
}

impl<'a> Modal<'a> {
    pub fn new(title: &'a str, percent: (u16, u16)) -> Self {
        Self {
            title,
            accent: colors::PRIMARY,
            percent,
        }
    }

    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    /// Clear the modal area, draw its frame and return the content area
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let modal_area = center(area, self.percent);
        frame.render_widget(Clear, modal_area);

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.accent))
            .title(self.title)
            .title_style(Style::default().fg(self.accent).add_modifier(Modifier::BOLD));
        frame.render_widget(block, modal_area);

        modal_area.inner(Margin::new(2, 1))
    }
}

/// Area of `percent` size centered in `area`
fn center(area: Rect, (width, height): (u16, u16)) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_inside_and_sized() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = center(outer, (60, 50));
        assert_eq!((inner.width, inner.height), (60, 20));
        assert_eq!((inner.x, inner.y), (20, 10));
    }
}
