//! # Navigation
//!
//! A back stack over the two routes.
//!
//! ```text
//!            navigate(Details(id))
//!   ┌──────┐ ─────────────────────▶ ┌─────────────┐
//!   │ List │                        │ Details(id) │
//!   └──────┘ ◀───────────────────── └─────────────┘
//!               navigate_up()
//! ```
//!
//! The stack always has `List` at the bottom, so `navigate_up` can never
//! leave the app without a screen.

use log::{debug, info};

use crate::core::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    back_stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            back_stack: vec![Route::List],
        }
    }

    pub fn current(&self) -> Route {
        self.back_stack.last().copied().unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    pub fn can_navigate_up(&self) -> bool {
        self.back_stack.len() > 1
    }

    /// Push `route` on top of the stack.
    ///
    /// Returns `false` when the transition isn't allowed: details are only
    /// reachable from the list, and navigating to `List` pops back instead
    /// of stacking a second list.
    pub fn navigate(&mut self, route: Route) -> bool {
        match (self.current(), route) {
            (Route::List, Route::Details(_)) => {
                info!("Navigate: {} -> {}", self.current(), route);
                self.back_stack.push(route);
                true
            }
            (Route::Details(_), Route::List) => self.navigate_up(),
            (from, to) => {
                debug!("Navigation {} -> {} ignored", from, to);
                false
            }
        }
    }

    /// Pop the current route. No-op at the list.
    pub fn navigate_up(&mut self) -> bool {
        if !self.can_navigate_up() {
            debug!("navigate_up at {} ignored", self.current());
            return false;
        }
        let from = self.back_stack.pop().unwrap_or_default();
        info!("Navigate up: {} -> {}", from, self.current());
        true
    }
}
