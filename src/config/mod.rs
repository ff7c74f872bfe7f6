//! Configuration schema definitions and validation.
//!
//! Defines the complete configuration structure for the mediator: general
//! settings, command gating tunables and the room link route. All
//! configurations are serializable to/from TOML format.

mod gate;
mod general;
mod loading;
mod paths;
mod room_link;

#[cfg(test)]
mod tests;

pub use gate::GateConfig;
pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use room_link::RoomLinkConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Command gating tunables.
    #[serde(default)]
    pub gate: GateConfig,

    /// Join-room link recognition.
    #[serde(default)]
    pub room_link: RoomLinkConfig,
}
