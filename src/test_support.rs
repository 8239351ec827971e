//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::directory::Directory;
use crate::core::state::App;
use crate::core::user::User;

/// `[{0, "Aang", online}, {1, "Korra", offline}]`
pub fn two_user_directory() -> Directory {
    Directory::new(vec![
        User::new(0, "Aang", "https://example.com/aang.png", true),
        User::new(1, "Korra", "https://example.com/korra.png", false),
    ])
    .expect("fixture ids are unique")
}

/// Creates a test App over the two-user directory.
pub fn test_app() -> App {
    App::new(two_user_directory(), "Home".to_string())
}

/// Flatten a test buffer into one string per row.
pub fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}
