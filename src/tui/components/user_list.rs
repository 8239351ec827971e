//! # UserList Component
//!
//! The list screen body: one `ProfileCard` per directory entry, in directory
//! order, inside a vertical scroll view.
//!
//! ## Architecture
//!
//! `UserList` is a transient component (created each frame) that wraps
//! `&'a mut UserListState` (persistent state) and the `Directory` (props).
//! Rendering records the viewport so that mouse hit testing and
//! keep-selection-visible scrolling work between frames.
//!
//! Every card has the same height, so the card under a screen row is plain
//! arithmetic: `(row - area.y + scroll_offset) / CARD_HEIGHT`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::directory::Directory;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::profile_card::{CARD_HEIGHT, ProfileCard};
use crate::tui::event::TuiEvent;

/// Columns kept free on the right for the scrollbar.
const SCROLLBAR_WIDTH: u16 = 1;
/// Horizontal margin around cards.
const CARD_MARGIN: u16 = 1;

pub const EMPTY_PLACEHOLDER: &str = "No users";

/// Scroll, selection and hit-test state for the user list.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct UserListState {
    pub scroll_state: ScrollViewState,
    /// Highlighted card (keyboard navigation or mouse hover)
    pub selected: Option<usize>,
    /// Number of cards in the list
    pub item_count: usize,
    /// Screen area of the last render
    pub area: Rect,
}

/// Events emitted by the user list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserListEvent {
    /// Open the card at this directory index.
    Open(usize),
}

impl UserListState {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            ..Default::default()
        }
    }

    /// Update the number of cards, dropping selections that no longer exist.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        if self.selected.is_some_and(|i| i >= item_count) {
            self.selected = item_count.checked_sub(1);
        }
    }

    fn total_height(&self) -> u16 {
        u16::try_from(self.item_count)
            .unwrap_or(u16::MAX)
            .saturating_mul(CARD_HEIGHT)
    }

    fn cards_per_page(&self) -> usize {
        usize::from((self.area.height / CARD_HEIGHT).max(1))
    }

    /// Move the selection by `delta` cards, clamped to the list.
    pub fn move_selection(&mut self, delta: isize) {
        if self.item_count == 0 {
            return;
        }
        let last = self.item_count - 1;
        let next = match self.selected {
            None if delta < 0 => last,
            None => 0,
            Some(i) => i.saturating_add_signed(delta).min(last),
        };
        self.selected = Some(next);
        self.scroll_to_selected();
    }

    pub fn select_first(&mut self) {
        if self.item_count > 0 {
            self.selected = Some(0);
            self.scroll_to_selected();
        }
    }

    pub fn select_last(&mut self) {
        if self.item_count > 0 {
            self.selected = Some(self.item_count - 1);
            self.scroll_to_selected();
        }
    }

    /// Scroll the viewport so the selected card is fully visible.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected else {
            return;
        };
        let card_top = u16::try_from(idx)
            .unwrap_or(u16::MAX)
            .saturating_mul(CARD_HEIGHT);
        let card_bottom = card_top.saturating_add(CARD_HEIGHT);
        let offset_y = self.scroll_state.offset().y;
        let viewport = self.area.height;

        if card_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: card_top });
        } else if card_bottom > offset_y + viewport {
            self.scroll_state.set_offset(Position {
                x: 0,
                y: card_bottom.saturating_sub(viewport),
            });
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.total_height().saturating_sub(self.area.height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Hit test: which card (if any) is at this screen position.
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.area.contains(Position { x: column, y: row }) {
            return None;
        }
        let content_y = (row - self.area.y) + self.scroll_state.offset().y;
        let idx = usize::from(content_y / CARD_HEIGHT);
        (idx < self.item_count).then_some(idx)
    }
}

impl EventHandler for UserListState {
    type Event = UserListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => self.move_selection(-1),
            TuiEvent::CursorDown => self.move_selection(1),
            TuiEvent::PageUp => {
                let page = self.cards_per_page() as isize;
                self.move_selection(-page);
            }
            TuiEvent::PageDown => {
                let page = self.cards_per_page() as isize;
                self.move_selection(page);
            }
            TuiEvent::Home => self.select_first(),
            TuiEvent::End => self.select_last(),
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            TuiEvent::MouseMove(column, row) => {
                if let Some(idx) = self.card_at(*column, *row) {
                    self.selected = Some(idx);
                }
            }
            TuiEvent::MouseClick(column, row) => {
                let idx = self.card_at(*column, *row)?;
                self.selected = Some(idx);
                return Some(UserListEvent::Open(idx));
            }
            TuiEvent::Submit => return self.selected.map(UserListEvent::Open),
            _ => {}
        }
        None
    }
}

/// Scrollable list of profile cards.
/// Created fresh each frame with references to state and data.
pub struct UserList<'a> {
    pub state: &'a mut UserListState,
    pub directory: &'a Directory,
}

impl<'a> UserList<'a> {
    pub fn new(state: &'a mut UserListState, directory: &'a Directory) -> Self {
        Self { state, directory }
    }
}

impl Component for UserList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.set_item_count(self.directory.len());
        self.state.area = area;

        if self.directory.is_empty() {
            let placeholder = Paragraph::new(EMPTY_PLACEHOLDER)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, area);
            return;
        }

        self.state.clamp_scroll();

        let content_width = area.width.saturating_sub(SCROLLBAR_WIDTH);
        let card_width = content_width.saturating_sub(CARD_MARGIN * 2);
        let mut scroll_view = ScrollView::new(Size::new(content_width, self.state.total_height()))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (i, user) in self.directory.iter().enumerate() {
            let highlighted = self.state.selected == Some(i);
            let card_rect = Rect::new(CARD_MARGIN, y_offset, card_width, CARD_HEIGHT);
            scroll_view.render_widget(ProfileCard::new(user, highlighted), card_rect);
            y_offset = y_offset.saturating_add(CARD_HEIGHT);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::user::User;
    use crate::test_support::{buffer_lines, two_user_directory};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &mut UserListState, directory: &Directory, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| UserList::new(state, directory).render(f, f.area()))
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn directory_of(n: i32) -> Directory {
        Directory::new(
            (0..n)
                .map(|i| User::new(i, format!("User {i}"), "", i % 2 == 0))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_renders_one_card_per_user_in_order() {
        let directory = two_user_directory();
        let mut state = UserListState::new(directory.len());
        let lines = render(&mut state, &directory, 40, 20);

        let aang_row = lines.iter().position(|l| l.contains("Aang")).unwrap();
        let korra_row = lines.iter().position(|l| l.contains("Korra")).unwrap();
        assert!(aang_row < korra_row);
        assert_eq!(korra_row - aang_row, usize::from(CARD_HEIGHT));
        assert_eq!(lines.iter().filter(|l| l.contains("Active now")).count(), 1);
        assert_eq!(lines.iter().filter(|l| l.contains("Offline")).count(), 1);
    }

    #[test]
    fn test_empty_directory_renders_placeholder() {
        let directory = Directory::empty();
        let mut state = UserListState::new(0);
        let lines = render(&mut state, &directory, 40, 10);
        assert!(lines.iter().any(|l| l.contains(EMPTY_PLACEHOLDER)));
        assert!(!lines.iter().any(|l| l.contains('╭')));
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(5, 1)), None);
    }

    #[test]
    fn test_keyboard_selection_and_open() {
        let mut state = UserListState::new(2);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, Some(0));
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, Some(1));
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(UserListEvent::Open(1)));
        state.handle_event(&TuiEvent::Home);
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_click_opens_card_under_pointer() {
        let directory = two_user_directory();
        let mut state = UserListState::new(directory.len());
        render(&mut state, &directory, 40, 20);

        // Second card starts at row CARD_HEIGHT
        let event = TuiEvent::MouseClick(10, CARD_HEIGHT + 1);
        assert_eq!(state.handle_event(&event), Some(UserListEvent::Open(1)));
        // Below the last card
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(10, CARD_HEIGHT * 3)), None);
    }

    #[test]
    fn test_hover_moves_the_single_highlight() {
        let directory = two_user_directory();
        let mut state = UserListState::new(directory.len());
        render(&mut state, &directory, 40, 20);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, Some(0));

        state.handle_event(&TuiEvent::MouseMove(10, CARD_HEIGHT + 1));
        assert_eq!(state.selected, Some(1));
        // Leaving the cards keeps the last highlight
        state.handle_event(&TuiEvent::MouseMove(10, CARD_HEIGHT * 3));
        assert_eq!(state.selected, Some(1));

        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        terminal
            .draw(|f| UserList::new(&mut state, &directory).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let highlighted_corners = (0..20)
            .filter(|&y| buffer[(CARD_MARGIN, y)].symbol() == "╭")
            .filter(|&y| buffer[(CARD_MARGIN, y)].fg == Color::Cyan)
            .count();
        assert_eq!(highlighted_corners, 1);
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(UserListEvent::Open(1)));
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let directory = directory_of(10);
        let mut state = UserListState::new(directory.len());
        let height = CARD_HEIGHT * 2;
        render(&mut state, &directory, 40, height);

        state.handle_event(&TuiEvent::End);
        assert_eq!(state.selected, Some(9));
        assert_eq!(state.scroll_state.offset().y, CARD_HEIGHT * 10 - height);

        let lines = render(&mut state, &directory, 40, height);
        assert!(lines.iter().any(|l| l.contains("User 9")));
        assert!(!lines.iter().any(|l| l.contains("User 0")));
    }

    #[test]
    fn test_hit_test_accounts_for_scroll() {
        let directory = directory_of(10);
        let mut state = UserListState::new(directory.len());
        render(&mut state, &directory, 40, CARD_HEIGHT * 2);
        state.scroll_state.set_offset(Position { x: 0, y: CARD_HEIGHT * 3 });
        assert_eq!(state.card_at(5, 0), Some(3));
        assert_eq!(state.card_at(5, CARD_HEIGHT), Some(4));
    }

    #[test]
    fn test_shrinking_list_clamps_selection() {
        let mut state = UserListState::new(5);
        state.select_last();
        state.set_item_count(2);
        assert_eq!(state.selected, Some(1));
        state.set_item_count(0);
        assert_eq!(state.selected, None);
    }
}
