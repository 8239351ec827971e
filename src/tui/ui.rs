//! Navigation host: picks the screen for the current route and lays out
//! app bar, body and key hints.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{AppBar, AppBarIcon, UserDetails, UserList, UserNotFound};

const LIST_HINTS: &str = " ↑/↓ select · Enter open · q quit";
const DETAILS_HINTS: &str = " Esc back · q quit";
const UNKNOWN_USER_TITLE: &str = "Unknown user";

/// Split the frame into app bar, body and hint line.
pub fn screen_areas(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [bar_area, body_area, hint_area] = screen_areas(frame.area());
    tui.app_bar_area = bar_area;

    match app.route() {
        Route::List => {
            AppBar::new(AppBarIcon::Home, app.title.clone(), app.status_message.clone())
                .render(frame, bar_area);
            UserList::new(&mut tui.user_list, &app.directory).render(frame, body_area);
            draw_hints(frame, hint_area, LIST_HINTS);
        }
        Route::Details(id) => {
            let user = app.directory.find(id);
            let title = user
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_else(|_| UNKNOWN_USER_TITLE.to_string());
            AppBar::new(AppBarIcon::Back, title, app.status_message.clone())
                .render(frame, bar_area);
            match user {
                Ok(user) => frame.render_widget(UserDetails::new(user), body_area),
                Err(_) => frame.render_widget(UserNotFound { id }, body_area),
            }
            draw_hints(frame, hint_area, DETAILS_HINTS);
        }
    }
}

fn draw_hints(frame: &mut Frame, area: Rect, hints: &str) {
    frame.render_widget(
        Line::styled(hints, Style::default().fg(Color::DarkGray)),
        area,
    );
}
