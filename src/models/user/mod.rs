// User module
// Identity of the signed-in user as reported by the auth provider

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the store uses to scope events to their owner
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The currently authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            id: UserId::new(id),
            display_name,
            email: None,
        }
    }

    /// Letter shown in the header avatar
    pub fn avatar_initial(&self) -> String {
        avatar_initial(self.display_name.as_deref())
    }
}

/// First letter of the display name, uppercased; `U` when unknown
pub fn avatar_initial(display_name: Option<&str>) -> String {
    display_name
        .and_then(|name| name.trim().chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "U".to_string())
}

/// An authenticated session: the user plus the bearer token for the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub access_token: String,
}
