//! The underlying player, seen through the narrow capability set the mediator wraps.

mod capabilities;
mod traits;
mod types;

pub use capabilities::PlayerCapabilities;
pub use traits::{PlaybackControl, PlaybackStatus, Player, SyncEmitter, VolumeControl};
pub use types::{
    PlayContext, PlayOptions, PlayRequest, PlayerStateUpdate, RepeatOptions, SkipTo, TrackKind,
    TrackRef, Volume,
};
