//! # User
//!
//! The single data record the app knows about. Users are built once at
//! startup (from config or the built-in directory) and never mutated.

use serde::{Deserialize, Serialize};

/// Status line shown for an online user.
pub const ACTIVE_LABEL: &str = "Active now";
/// Status line shown for an offline user.
pub const OFFLINE_LABEL: &str = "Offline";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    /// Lookup key, unique within a directory.
    pub id: i32,
    pub name: String,
    /// Opaque reference to an external picture. Never fetched.
    pub picture_url: String,
    /// `true` = online.
    #[serde(default)]
    pub status: bool,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>, picture_url: impl Into<String>, status: bool) -> Self {
        Self {
            id,
            name: name.into(),
            picture_url: picture_url.into(),
            status,
        }
    }

    pub fn is_online(&self) -> bool {
        self.status
    }

    /// "Active now" or "Offline".
    pub fn status_label(&self) -> &'static str {
        status_label(self.status)
    }

    /// Up to two uppercase initials, taken from the first two words of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub fn status_label(is_online: bool) -> &'static str {
    if is_online { ACTIVE_LABEL } else { OFFLINE_LABEL }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_label() {
        let online = User::new(0, "Aang", "", true);
        let offline = User::new(1, "Korra", "", false);
        assert_eq!(online.status_label(), "Active now");
        assert_eq!(offline.status_label(), "Offline");
    }

    #[test]
    fn test_initials() {
        assert_eq!(User::new(0, "Aang", "", true).initials(), "A");
        assert_eq!(User::new(1, "uncle iroh", "", true).initials(), "UI");
        assert_eq!(User::new(2, "Fire Lord Zuko", "", true).initials(), "FL");
        assert_eq!(User::new(3, "   ", "", true).initials(), "");
    }

    #[test]
    fn test_status_defaults_to_offline_in_toml() {
        let user: User = toml::from_str(
            r#"
id = 4
name = "Toph"
picture_url = "https://example.com/toph.png"
"#,
        )
        .unwrap();
        assert!(!user.is_online());
        assert_eq!(user.id, 4);
    }
}
