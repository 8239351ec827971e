//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters and are rebuilt
//! each frame:
//! - `AppBar`: Top bar with navigation icon and title
//! - `ProfilePicture`: Presence-coloured avatar circle with initials
//! - `ProfileContent`: Name + "Active now" / "Offline"
//! - `ProfileCard`: Picture + content as one compact row
//! - `UserDetails`: Large picture + content for the details screen
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `UserList`: Scrollable card list with selection and hit testing
//!
//! ### Composition
//!
//! `UserList` renders a `ProfileCard` per user; cards and `UserDetails`
//! both compose `ProfilePicture` + `ProfileContent` with different sizes
//! and alignment.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── app_bar.rs          (Top bar)
//! ├── profile_picture.rs  (Avatar)
//! ├── profile_content.rs  (Name + status)
//! ├── profile_card.rs     (List row)
//! ├── user_list.rs        (List screen body)
//! └── user_details.rs     (Details screen body)
//! ```

pub mod app_bar;
pub mod profile_card;
pub mod profile_content;
pub mod profile_picture;
pub mod user_details;
pub mod user_list;

pub use app_bar::{AppBar, AppBarIcon};
pub use profile_card::ProfileCard;
pub use user_details::{UserDetails, UserNotFound};
pub use user_list::{UserList, UserListEvent, UserListState};
