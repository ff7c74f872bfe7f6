//! Collaborators the mediator sits between.

/// Shared primitives: watchable properties and typed events
pub mod common;
/// The underlying player's capability set
pub mod player;
/// Network session state and requests
pub mod session;
/// Notifications and navigation
pub mod ui;

pub use common::{Event, Property, SubscriptionId};
pub use player::{
    PlayOptions, PlayRequest, PlaybackControl, PlaybackStatus, Player, PlayerCapabilities,
    PlayerStateUpdate, SyncEmitter, TrackKind, Volume, VolumeControl,
};
pub use session::{ConnectionState, SessionRequests, SessionState};
pub use ui::{History, Notice, Notifier, RoomJoiner};
