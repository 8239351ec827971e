//! # ProfilePicture Component
//!
//! Stand-in for a user's photo: a braille circle with the user's initials.
//! The circle colour encodes presence (green online, red offline).
//! The picture URL itself is never fetched.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::Widget;
use ratatui::widgets::canvas::{Canvas, Circle};

/// Cells used by each picture size: (width, height).
/// Terminal cells are roughly twice as tall as wide, hence width = 2 × height.
const SMALL_SIZE: (u16, u16) = (6, 3);
const LARGE_SIZE: (u16, u16) = (24, 12);

pub const ONLINE_COLOR: Color = Color::LightGreen;
pub const OFFLINE_COLOR: Color = Color::Red;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureSize {
    /// Used in list cards.
    Small,
    /// Used on the details screen.
    Large,
}

impl PictureSize {
    pub const fn width(self) -> u16 {
        match self {
            PictureSize::Small => SMALL_SIZE.0,
            PictureSize::Large => LARGE_SIZE.0,
        }
    }

    pub const fn height(self) -> u16 {
        match self {
            PictureSize::Small => SMALL_SIZE.1,
            PictureSize::Large => LARGE_SIZE.1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfilePicture<'a> {
    pub initials: &'a str,
    pub is_online: bool,
    pub size: PictureSize,
}

impl<'a> ProfilePicture<'a> {
    pub fn new(initials: &'a str, is_online: bool, size: PictureSize) -> Self {
        Self {
            initials,
            is_online,
            size,
        }
    }

    pub fn border_color(&self) -> Color {
        presence_color(self.is_online)
    }
}

pub fn presence_color(is_online: bool) -> Color {
    if is_online { ONLINE_COLOR } else { OFFLINE_COLOR }
}

impl Widget for ProfilePicture<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let color = self.border_color();
        let label = Line::styled(
            self.initials.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        );
        // Shift left by half the label so it sits in the middle of the circle
        let label_x = -(self.initials.chars().count() as f64) / f64::from(area.width.max(1));

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(move |ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: 0.9,
                    color,
                });
                ctx.print(label_x, 0.0, label.clone());
            })
            .render(area, buf);
    }
}
