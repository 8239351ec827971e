use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Widget};

use crate::core::user::User;
use crate::tui::components::profile_content::{CONTENT_HEIGHT, ProfileContent};
use crate::tui::components::profile_picture::{PictureSize, ProfilePicture};

/// Rows taken by one card: borders + a small picture.
pub const CARD_HEIGHT: u16 = PictureSize::Small.height() + 2;
/// Gap between the picture and the text.
const PICTURE_GAP: u16 = 1;

/// One user rendered as a compact row: picture + name + status.
///
/// Transient: built each frame by `UserList` for every user, with
/// `highlighted` coming from the list's persistent selection.
#[derive(Debug, Clone)]
pub struct ProfileCard<'a> {
    pub user: &'a User,
    pub initials: String,
    pub highlighted: bool,
}

impl<'a> ProfileCard<'a> {
    pub fn new(user: &'a User, highlighted: bool) -> Self {
        Self {
            user,
            initials: user.initials(),
            highlighted,
        }
    }
}

impl Widget for ProfileCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.highlighted {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let [picture_area, _, content_area] = Layout::horizontal([
            Constraint::Length(PictureSize::Small.width()),
            Constraint::Length(PICTURE_GAP),
            Constraint::Min(0),
        ])
        .areas(inner);

        ProfilePicture::new(&self.initials, self.user.status, PictureSize::Small)
            .render(picture_area, buf);

        // Center the two text lines vertically in the card
        let [_, text_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(CONTENT_HEIGHT),
            Constraint::Fill(1),
        ])
        .areas(content_area);
        ProfileContent::new(&self.user.name, self.user.status, Alignment::Left)
            .render(text_area, buf);
    }
}
