use serde::{Deserialize, Serialize};

/// ================================
/// Nested GameCache configuration
/// ================================
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NestedConfig {
    pub project: ProjectConfig,
    pub boardgamegeek: BggConfig,
    pub github: GithubConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BggConfig {
    pub user_name: String,
    /// Absent until a token has been provisioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GithubConfig {
    pub repo: String,
}
