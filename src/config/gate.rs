use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tunables for command gating.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct GateConfig {
    /// Progress (in milliseconds) below which a guest's skip-to-previous
    /// performs the real skip instead of restarting the current track.
    pub restart_threshold_ms: u64,

    /// Track identity kinds (`spotify:<kind>:<id>`) a guest may request
    /// from the host when their own play is rejected.
    pub listenable_kinds: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            restart_threshold_ms: 3000,
            listenable_kinds: vec!["track".to_string(), "episode".to_string()],
        }
    }
}

impl GateConfig {
    /// Whether a track kind name is in the listenable set.
    pub fn is_listenable(&self, kind: &str) -> bool {
        self.listenable_kinds
            .iter()
            .any(|listenable| listenable.eq_ignore_ascii_case(kind))
    }
}
