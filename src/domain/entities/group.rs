use serde::{Deserialize, Serialize};

/// Identifier of the group every broadcast call is scoped to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupContext {
    pub group_id: String,
}

impl GroupContext {
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
        }
    }
}

impl From<&str> for GroupContext {
    fn from(group_id: &str) -> Self {
        Self::new(group_id)
    }
}

impl From<String> for GroupContext {
    fn from(group_id: String) -> Self {
        Self { group_id }
    }
}

/// Group metadata shown on the join prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    pub group_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon_url: String,
}

impl GroupInfo {
    pub fn new(group_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            name: String::new(),
            description: String::new(),
            icon_url: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = icon_url.into();
        self
    }

    pub fn context(&self) -> GroupContext {
        GroupContext::new(self.group_id.clone())
    }
}
