//! 链接状态指示器
//!
//! 显示链接的启用状态（Active / Inactive）

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::interfaces::tui::constants::colors;

/// 链接状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Active,
    Inactive,
}

impl LinkStatus {
    pub fn from_active(is_active: bool) -> Self {
        if is_active { Self::Active } else { Self::Inactive }
    }

    /// 获取状态文本
    pub fn text(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// 获取状态颜色
    pub fn color(&self) -> Color {
        match self {
            Self::Active => colors::SUCCESS,
            Self::Inactive => colors::MUTED,
        }
    }
}

/// 状态徽章组件
pub struct StatusIndicator {
    pub status: LinkStatus,
}

impl StatusIndicator {
    pub fn new(is_active: bool) -> Self {
        Self {
            status: LinkStatus::from_active(is_active),
        }
    }

    /// 徽章文本，如 `[ Active ]`
    pub fn text(&self) -> String {
        format!("[ {} ]", self.status.text())
    }

    pub fn style(&self) -> Style {
        Style::default()
            .fg(self.status.color())
            .add_modifier(Modifier::BOLD)
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(self.text(), self.style())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShortLink;

    #[test]
    fn test_link_status_from_active() {
        assert_eq!(LinkStatus::from_active(true), LinkStatus::Active);
        assert_eq!(LinkStatus::from_active(false), LinkStatus::Inactive);
    }

    #[test]
    fn test_status_matches_record_label() {
        for is_active in [true, false] {
            let link = ShortLink {
                slug: "a".into(),
                original_url: "https://example.com".into(),
                shortened_link: "https://short.ly/a".into(),
                visits: 0,
                last_visit_at: None,
                is_active,
            };
            assert_eq!(LinkStatus::from_active(is_active).text(), link.status_label());
        }
    }

    #[test]
    fn test_status_indicator_text() {
        assert_eq!(StatusIndicator::new(true).text(), "[ Active ]");
        assert_eq!(StatusIndicator::new(false).text(), "[ Inactive ]");
    }
}
