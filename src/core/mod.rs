//! # Core Application Logic
//!
//! The directory, routes and navigation state.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • User / Directory     │
//!                    │  • Route / Navigator    │
//!                    │  • App + update()       │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`user`]: The `User` record
//! - [`directory`]: The read-only list of users and lookup by id
//! - [`route`]: `List` / `Details/{id}` routes
//! - [`navigation`]: The back stack between routes
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Config file loading and resolution

pub mod action;
pub mod config;
pub mod directory;
pub mod navigation;
pub mod route;
pub mod state;
pub mod user;

pub use action::{Action, Effect, update};
pub use directory::{Directory, DirectoryError};
pub use route::Route;
pub use state::App;
pub use user::User;
