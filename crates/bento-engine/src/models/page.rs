use crate::models::Block;
use serde::{Deserialize, Serialize};

/// Page owner details shown beside the grid
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A saved bento page: profile plus its ordered block collection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub blocks: Vec<Block>,
}
