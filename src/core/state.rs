//! # Application State
//!
//! Core state for the profile card app. Domain only, no TUI types.
//! Presentation state (scroll offsets, highlighted card) lives in `tui`.
//!
//! ```text
//! App
//! ├── directory: Directory     // read-only user list
//! ├── navigator: Navigator     // List / Details(id) back stack
//! ├── title: String            // app bar title on the list screen
//! └── status_message: String   // transient feedback (e.g. rejected navigation)
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::directory::{Directory, DirectoryError};
use crate::core::navigation::Navigator;
use crate::core::route::Route;
use crate::core::user::User;

pub struct App {
    pub directory: Directory,
    pub navigator: Navigator,
    pub title: String,
    pub status_message: String,
}

impl App {
    pub fn new(directory: Directory, title: String) -> Self {
        Self {
            directory,
            navigator: Navigator::new(),
            title,
            status_message: String::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.directory.clone(), config.title.clone())
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    /// The user shown on the details screen, or `None` on the list.
    pub fn detail_user(&self) -> Option<Result<&User, DirectoryError>> {
        self.route().user_id().map(|id| self.directory.find(id))
    }
}
