//! # Routes
//!
//! Named navigation destinations. Two exist:
//!
//! ```text
//! "List"          → Route::List
//! "Details/{id}"  → Route::Details(id)
//! ```
//!
//! A details route whose id is missing or not an integer falls back to a
//! default id (the first user in the directory when one is available).

use std::fmt;
use std::str::FromStr;

use crate::core::directory::Directory;

pub const LIST_ROUTE: &str = "List";
pub const DETAILS_ROUTE: &str = "Details";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,
    Details(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    Unknown(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Unknown(route) => write!(f, "unknown route '{route}'"),
        }
    }
}

impl std::error::Error for RouteError {}

impl Route {
    /// Parse a route string, using `default_id` when a details route has no
    /// usable id.
    pub fn parse_with_default(s: &str, default_id: i32) -> Result<Self, RouteError> {
        let s = s.trim();
        if s == LIST_ROUTE {
            return Ok(Route::List);
        }

        let Some(rest) = s.strip_prefix(DETAILS_ROUTE) else {
            return Err(RouteError::Unknown(s.to_string()));
        };
        let id = match rest {
            "" => default_id,
            _ => match rest.strip_prefix('/') {
                Some(arg) => arg.parse().unwrap_or(default_id),
                // "DetailsFoo" is not a details route
                None => return Err(RouteError::Unknown(s.to_string())),
            },
        };
        Ok(Route::Details(id))
    }

    /// Parse against a directory: a missing id means the first user.
    pub fn parse_in(s: &str, directory: &Directory) -> Result<Self, RouteError> {
        let default_id = directory.first().map(|user| user.id).unwrap_or(0);
        Self::parse_with_default(s, default_id)
    }

    pub fn user_id(&self) -> Option<i32> {
        match self {
            Route::List => None,
            Route::Details(id) => Some(*id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => f.write_str(LIST_ROUTE),
            Route::Details(id) => write!(f, "{DETAILS_ROUTE}/{id}"),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_default(s, 0)
    }
}
