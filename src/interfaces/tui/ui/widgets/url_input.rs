//! 单行 URL 输入框
//!
//! 焦点高亮、校验提示、请求中置灰

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::interfaces::tui::constants::colors;

/// Bordered single-line input with an optional validation line below it
pub struct UrlInput<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    validation: Option<&'a str>,
    focused: bool,
    busy: bool,
}

impl<'a> UrlInput<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            validation: None,
            focused: true,
            busy: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn validation(mut self, message: Option<&'a str>) -> Self {
        self.validation = message;
        self
    }

    /// Request in flight: no focus highlight, marked busy
    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self.focused = !busy;
        self
    }

    /// Rows needed: the box plus one for the validation message
    pub fn height(&self) -> u16 {
        3 + u16::from(self.validation.is_some())
    }

    fn title(&self) -> String {
        let mut title = format!("{} *", self.label);
        if self.value.is_empty() {
            if !self.placeholder.is_empty() {
                title.push_str(&format!(" ({})", self.placeholder));
            }
        } else {
            title.push_str(&format!(" ({} chars)", self.value.chars().count()));
        }
        if self.busy {
            title.push_str(" [busy]");
        }
        title
    }

    fn border_style(&self) -> Style {
        match (self.busy, self.validation.is_some(), self.focused) {
            (true, _, _) => Style::default().fg(colors::MUTED),
            (false, true, _) => Style::default().fg(colors::ERROR),
            (false, false, true) => Style::default()
                .fg(colors::FOCUS_FG)
                .bg(colors::FOCUS_BG)
                .add_modifier(Modifier::BOLD),
            (false, false, false) => Style::default().fg(Color::White),
        }
    }
}

impl Widget for &UrlInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [field, message] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

        Paragraph::new(self.value)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(self.border_style())
                    .title(self.title()),
            )
            .render(field, buf);

        if let Some(text) = self.validation {
            Paragraph::new(text)
                .style(Style::default().fg(colors::ERROR))
                .render(message, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_variants() {
        let empty = UrlInput::new("URL", "").placeholder("https://...");
        assert_eq!(empty.title(), "URL * (https://...)");

        let typed = UrlInput::new("URL", "https://a.io");
        assert_eq!(typed.title(), "URL * (12 chars)");

        let busy = UrlInput::new("URL", "x").busy(true);
        assert!(busy.title().ends_with("[busy]"));
    }

    #[test]
    fn test_height_grows_with_validation() {
        let input = UrlInput::new("URL", "");
        assert_eq!(input.height(), 3);
        assert_eq!(input.validation(Some("Please enter a URL.")).height(), 4);
    }

    #[test]
    fn test_renders_value_and_message() {
        let input = UrlInput::new("URL", "abc").validation(Some("Please enter a URL."));
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        (&input).render(area, &mut buf);

        let line = |y: u16| -> String {
            (0..area.width).map(|x| buf[(x, y)].symbol().to_string()).collect()
        };
        assert!(line(1).contains("abc"));
        assert!(line(3).starts_with("Please enter a URL."));
    }
}
