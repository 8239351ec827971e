//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses Enter on a card? That's `Action::SelectUser(id)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state and returns an `Effect` for the event loop.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, warn};

use crate::core::route::Route;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the details screen for a user id.
    SelectUser(i32),
    /// Back-navigation.
    NavigateUp,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The visible route changed; presentation state may need a reset.
    RouteChanged,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} at {}", action, app.route());
    match action {
        Action::SelectUser(id) => {
            if let Err(e) = app.directory.find(id) {
                warn!("Rejected selection: {}", e);
                app.status_message = format!("Cannot open user: {e}");
                return Effect::None;
            }
            if app.navigator.navigate(Route::Details(id)) {
                app.status_message.clear();
                Effect::RouteChanged
            } else {
                Effect::None
            }
        }
        Action::NavigateUp => {
            if app.navigator.navigate_up() {
                app.status_message.clear();
                Effect::RouteChanged
            } else {
                Effect::None
            }
        }
        Action::Quit => Effect::Quit,
    }
}
