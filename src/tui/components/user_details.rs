//! # UserDetails Component
//!
//! The details screen body: a large picture, the name and presence line
//! centered under it, and the picture reference at the bottom.
//!
//! `UserNotFound` is rendered instead when the route's id has no match in
//! the directory.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::core::user::User;
use crate::tui::components::profile_content::{CONTENT_HEIGHT, ProfileContent};
use crate::tui::components::profile_picture::{PictureSize, ProfilePicture};

const TOP_MARGIN: u16 = 1;
const SECTION_GAP: u16 = 1;

#[derive(Debug, Clone)]
pub struct UserDetails<'a> {
    pub user: &'a User,
}

impl<'a> UserDetails<'a> {
    pub fn new(user: &'a User) -> Self {
        Self { user }
    }
}

/// Wrap the picture reference to the available width.
fn picture_lines(picture_url: &str, width: u16) -> Vec<Line<'static>> {
    if picture_url.is_empty() || width == 0 {
        return Vec::new();
    }
    // URLs rarely contain spaces, so break anywhere rather than overflow
    let options = textwrap::Options::new(usize::from(width)).break_words(true);
    textwrap::wrap(picture_url, options)
        .into_iter()
        .map(|line| Line::from(line.into_owned()))
        .collect()
}

impl Widget for UserDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, picture_row, _, content_area, _, url_area] = Layout::vertical([
            Constraint::Length(TOP_MARGIN),
            Constraint::Length(PictureSize::Large.height()),
            Constraint::Length(SECTION_GAP),
            Constraint::Length(CONTENT_HEIGHT),
            Constraint::Length(SECTION_GAP),
            Constraint::Min(0),
        ])
        .areas(area);

        let [picture_area] = Layout::horizontal([Constraint::Length(PictureSize::Large.width())])
            .flex(Flex::Center)
            .areas(picture_row);
        let initials = self.user.initials();
        ProfilePicture::new(&initials, self.user.status, PictureSize::Large)
            .render(picture_area, buf);

        ProfileContent::new(&self.user.name, self.user.status, Alignment::Center)
            .render(content_area, buf);

        Paragraph::new(picture_lines(&self.user.picture_url, url_area.width))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(url_area, buf);
    }
}

/// Placeholder for a details route whose id isn't in the directory.
#[derive(Debug, Clone, Copy)]
pub struct UserNotFound {
    pub id: i32,
}

impl Widget for UserNotFound {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::styled(
                "User not found",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!("No user has id {}", self.id),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        let [centered] = Layout::vertical([Constraint::Length(2)])
            .flex(Flex::Center)
            .areas(area);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centered, buf);
    }
}
