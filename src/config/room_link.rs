use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Join-room route recognition.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct RoomLinkConfig {
    /// First path segment of the join route, matched case-insensitively.
    pub route_keyword: String,
}

impl Default for RoomLinkConfig {
    fn default() -> Self {
        Self {
            route_keyword: "listentogether".to_string(),
        }
    }
}
