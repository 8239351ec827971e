//! # AppBar Component
//!
//! Top bar: a navigation icon followed by the screen title.
//!
//! - List screen: `⌂  Home`
//! - Details screen: `←  Korra` (the icon is clickable and navigates up)
//!
//! An optional status message is appended after a separator:
//! `⌂  Home | Cannot open user: no user with id 9`.
//!
//! Stateless: all data arrives as props and the struct is rebuilt each frame.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Columns treated as the clickable icon (icon + padding).
pub const ICON_HIT_WIDTH: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppBarIcon {
    Home,
    Back,
}

impl AppBarIcon {
    pub fn symbol(self) -> &'static str {
        match self {
            AppBarIcon::Home => "⌂",
            AppBarIcon::Back => "←",
        }
    }
}

pub struct AppBar {
    pub icon: AppBarIcon,
    pub title: String,
    pub status_message: String,
}

impl AppBar {
    pub fn new(icon: AppBarIcon, title: String, status_message: String) -> Self {
        Self {
            icon,
            title,
            status_message,
        }
    }

    /// Whether a click at this position lands on the icon.
    pub fn icon_hit(area: Rect, column: u16, row: u16) -> bool {
        let icon_area = Rect {
            width: area.width.min(ICON_HIT_WIDTH),
            ..area
        };
        icon_area.contains(Position { x: column, y: row })
    }
}

impl Component for AppBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let bar_style = Style::default().fg(Color::White).bg(Color::Blue);
        let mut spans = vec![
            Span::styled(format!(" {} ", self.icon.symbol()), bar_style),
            Span::styled(
                format!(" {}", self.title),
                bar_style.add_modifier(Modifier::BOLD),
            ),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(format!(" | {}", self.status_message), bar_style));
        }

        frame.render_widget(Line::from(spans).style(bar_style), area);
    }
}
