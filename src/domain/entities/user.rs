use serde::{Deserialize, Serialize};
use std::fmt;

/// The group member who posted a broadcast
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    pub user_id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub avatar_url: String,
}

impl Author {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            full_name: String::new(),
            avatar_url: String::new(),
        }
    }

    pub fn with_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn with_avatar(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = avatar_url.into();
        self
    }

    /// Full name when the server sent one, otherwise the user id
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.user_id
        } else {
            &self.full_name
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
