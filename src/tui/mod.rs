//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps until an event arrives (or the
//! poll times out) and only redraws after events. All pending events are
//! drained before the next draw.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{AppBar, UserListEvent, UserListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: std::time::Duration = std::time::Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub user_list: UserListState,
    /// Where the app bar was last drawn (for icon clicks)
    pub app_bar_area: Rect,
}

impl TuiState {
    pub fn new(user_count: usize) -> Self {
        Self {
            user_list: UserListState::new(user_count),
            app_bar_area: Rect::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Translate one TUI event into state changes.
///
/// Back at the list leaves the app, the same as the system back button on
/// a root screen.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::Resize => return Effect::None,
        TuiEvent::MouseClick(column, row)
            if AppBar::icon_hit(tui.app_bar_area, *column, *row) =>
        {
            return update(app, Action::NavigateUp);
        }
        _ => {}
    }

    match app.route() {
        Route::List => {
            if matches!(event, TuiEvent::Back) {
                return update(app, Action::Quit);
            }
            tui.user_list.set_item_count(app.directory.len());
            match tui.user_list.handle_event(event) {
                Some(UserListEvent::Open(index)) => match app.directory.get(index) {
                    Some(user) => {
                        let id = user.id;
                        update(app, Action::SelectUser(id))
                    }
                    None => Effect::None,
                },
                None => Effect::None,
            }
        }
        Route::Details(_) => match event {
            TuiEvent::Back | TuiEvent::CursorLeft => update(app, Action::NavigateUp),
            _ => Effect::None,
        },
    }
}

pub fn run(config: ResolvedConfig, start_route: Option<&str>) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(app.directory.len());
    if let Some(route) = start_route {
        open_start_route(&mut app, &mut tui, route);
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Mouse capture unavailable: {}", e);
            None
        }
    };
    info!(
        "Showing {} users starting at {}",
        app.directory.len(),
        app.route()
    );

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    info!("Exiting at {}", app.route());
    ratatui::restore();
    result
}

/// Apply a `--route` argument as if the user had navigated there.
pub fn open_start_route(app: &mut App, tui: &mut TuiState, route: &str) {
    match Route::parse_in(route, &app.directory) {
        Ok(Route::List) => {}
        Ok(Route::Details(id)) => {
            update(app, Action::SelectUser(id));
            tui.user_list.selected = app.directory.position(id);
        }
        Err(e) => {
            warn!("Ignoring start route: {}", e);
            app.status_message = e.to_string();
        }
    }
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(app, tui, &event) {
                Effect::Quit => return Ok(()),
                Effect::RouteChanged => debug!("Route is now {}", app.route()),
                Effect::None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_enter_on_second_card_opens_details() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.directory.len());
        handle_event(&mut app, &mut tui, &TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, &TuiEvent::CursorDown);
        let effect = handle_event(&mut app, &mut tui, &TuiEvent::Submit);
        assert_eq!(effect, Effect::RouteChanged);
        assert_eq!(app.route().to_string(), "Details/1");
    }

    #[test]
    fn test_back_from_details_returns_to_list_and_keeps_selection() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.directory.len());
        handle_event(&mut app, &mut tui, &TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, &TuiEvent::Submit);
        assert_eq!(app.route(), Route::Details(0));

        assert_eq!(handle_event(&mut app, &mut tui, &TuiEvent::Back), Effect::RouteChanged);
        assert_eq!(app.route(), Route::List);
        assert_eq!(tui.user_list.selected, Some(0));
    }

    #[test]
    fn test_back_at_list_quits() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.directory.len());
        assert_eq!(handle_event(&mut app, &mut tui, &TuiEvent::Back), Effect::Quit);
    }

    #[test]
    fn test_left_arrow_goes_back_from_details_but_never_quits() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.directory.len());
        assert_eq!(handle_event(&mut app, &mut tui, &TuiEvent::CursorLeft), Effect::None);
        assert_eq!(app.route(), Route::List);

        update(&mut app, Action::SelectUser(1));
        assert_eq!(
            handle_event(&mut app, &mut tui, &TuiEvent::CursorLeft),
            Effect::RouteChanged
        );
        assert_eq!(app.route(), Route::List);
        assert_eq!(handle_event(&mut app, &mut tui, &TuiEvent::CursorLeft), Effect::None);
    }

    #[test]
    fn test_app_bar_icon_click_navigates_up() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.directory.len());
        tui.app_bar_area = Rect::new(0, 0, 40, 1);
        update(&mut app, Action::SelectUser(1));

        let effect = handle_event(&mut app, &mut tui, &TuiEvent::MouseClick(1, 0));
        assert_eq!(effect, Effect::RouteChanged);
        assert_eq!(app.route(), Route::List);

        // Home icon on the list does nothing
        assert_eq!(handle_event(&mut app, &mut tui, &TuiEvent::MouseClick(1, 0)), Effect::None);
    }

    #[test]
    fn test_list_keys_ignored_on_details() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.directory.len());
        update(&mut app, Action::SelectUser(0));
        assert_eq!(handle_event(&mut app, &mut tui, &TuiEvent::Submit), Effect::None);
        assert_eq!(handle_event(&mut app, &mut tui, &TuiEvent::CursorDown), Effect::None);
        assert_eq!(app.route(), Route::Details(0));
    }

    #[test]
    fn test_start_route_opens_details() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.directory.len());
        open_start_route(&mut app, &mut tui, "Details/1");
        assert_eq!(app.route(), Route::Details(1));
        assert_eq!(tui.user_list.selected, Some(1));
    }

    #[test]
    fn test_start_route_without_id_opens_first_user() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.directory.len());
        open_start_route(&mut app, &mut tui, "Details");
        assert_eq!(app.route(), Route::Details(0));
    }

    #[test]
    fn test_bad_start_route_stays_on_list() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.directory.len());
        open_start_route(&mut app, &mut tui, "Settings");
        assert_eq!(app.route(), Route::List);
        assert_eq!(app.status_message, "unknown route 'Settings'");

        open_start_route(&mut app, &mut tui, "Details/9");
        assert_eq!(app.route(), Route::List);
        assert_eq!(tui.user_list.selected, None);
    }

    #[test]
    fn test_quit_from_any_route() {
        let mut app = test_app();
        let mut tui = TuiState::new(app.directory.len());
        update(&mut app, Action::SelectUser(0));
        assert_eq!(handle_event(&mut app, &mut tui, &TuiEvent::ForceQuit), Effect::Quit);
    }
}
