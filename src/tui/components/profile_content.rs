//! # ProfileContent Component
//!
//! Two lines of text for a user: the name and the presence line
//! ("Active now" / "Offline"). Offline names are dimmed.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::user::status_label;

/// Rows needed by the component.
pub const CONTENT_HEIGHT: u16 = 2;

#[derive(Debug, Clone)]
pub struct ProfileContent<'a> {
    pub name: &'a str,
    pub is_online: bool,
    pub alignment: Alignment,
}

impl<'a> ProfileContent<'a> {
    pub fn new(name: &'a str, is_online: bool, alignment: Alignment) -> Self {
        Self {
            name,
            is_online,
            alignment,
        }
    }

    fn name_style(&self) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if self.is_online {
            style
        } else {
            style.add_modifier(Modifier::DIM)
        }
    }
}

impl Widget for ProfileContent<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = usize::from(area.width);
        let lines = vec![
            Line::styled(truncate_to_width(self.name, width), self.name_style()),
            Line::styled(
                status_label(self.is_online),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ];
        Paragraph::new(lines)
            .alignment(self.alignment)
            .render(area, buf);
    }
}

/// Truncate to `max_width` display columns, adding "…" when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        // Leave one column for the ellipsis
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
