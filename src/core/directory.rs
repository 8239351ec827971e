//! # User Directory
//!
//! The app's only data source: an ordered, read-only list of users.
//!
//! A `Directory` is built once at startup and handed to `App::new`. It is
//! cheap to clone (`Arc<[User]>`), so screens can hold their own handle
//! without borrowing from the app state.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::core::user::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Two users share the same id.
    DuplicateId(i32),
    /// No user has the requested id.
    UserNotFound(i32),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::DuplicateId(id) => write!(f, "duplicate user id {id}"),
            DirectoryError::UserNotFound(id) => write!(f, "no user with id {id}"),
        }
    }
}

impl std::error::Error for DirectoryError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    users: Arc<[User]>,
}

impl Directory {
    /// Build a directory, rejecting duplicate ids.
    pub fn new(users: Vec<User>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::with_capacity(users.len());
        for user in &users {
            if !seen.insert(user.id) {
                return Err(DirectoryError::DuplicateId(user.id));
            }
        }
        Ok(Self {
            users: users.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            users: Arc::from(Vec::new()),
        }
    }

    /// The directory shipped with the binary, used when config has no users.
    pub fn builtin() -> Self {
        let users = BUILTIN_USERS
            .iter()
            .map(|&(id, name, picture_url, status)| User::new(id, name, picture_url, status))
            .collect::<Vec<_>>();
        Self {
            users: users.into(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn iter(&self) -> std::slice::Iter<'_, User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&User> {
        self.users.get(index)
    }

    pub fn first(&self) -> Option<&User> {
        self.users.first()
    }

    /// Linear scan for the user with `id`.
    pub fn find(&self, id: i32) -> Result<&User, DirectoryError> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .ok_or(DirectoryError::UserNotFound(id))
    }

    /// Position of `id` in directory order.
    pub fn position(&self, id: i32) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }

    pub fn contains(&self, id: i32) -> bool {
        self.position(id).is_some()
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a User;
    type IntoIter = std::slice::Iter<'a, User>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

const BUILTIN_USERS: &[(i32, &str, &str, bool)] = &[
    (0, "Aang", "https://randomuser.me/api/portraits/men/1.jpg", true),
    (1, "Korra", "https://randomuser.me/api/portraits/women/2.jpg", false),
    (2, "Katara", "https://randomuser.me/api/portraits/women/3.jpg", true),
    (3, "Sokka", "https://randomuser.me/api/portraits/men/4.jpg", false),
    (4, "Toph Beifong", "https://randomuser.me/api/portraits/women/5.jpg", true),
    (5, "Zuko", "https://randomuser.me/api/portraits/men/6.jpg", false),
    (6, "Uncle Iroh", "https://randomuser.me/api/portraits/men/7.jpg", true),
    (7, "Asami Sato", "https://randomuser.me/api/portraits/women/8.jpg", false),
];
