use std::sync::Arc;

use serde_json::Value;

use super::{PlayRequest, Volume};

/// Primitive playback commands of the underlying player.
///
/// Implementations are expected to return immediately and report the outcome
/// through their own event stream.
pub trait PlaybackControl: Send + Sync {
    /// Start playing a context.
    fn play(&self, request: &PlayRequest);

    /// Pause the current track.
    fn pause(&self);

    /// Resume the current track.
    fn resume(&self);

    /// Seek within the current track.
    fn seek_to(&self, position_ms: u64);

    /// Skip to the next queued track. `args` is passed through untouched.
    fn skip_to_next(&self, args: &Value);

    /// Skip to the previous track. `args` is passed through untouched.
    fn skip_to_previous(&self, args: &Value);
}

/// Live playback readings.
pub trait PlaybackStatus: Send + Sync {
    /// Elapsed time in the current track.
    fn progress_ms(&self) -> u64;

    /// Whether playback is currently paused.
    fn is_paused(&self) -> bool;
}

/// The player's own outgoing event emitter.
pub trait SyncEmitter: Send + Sync {
    /// Announce a state transition to the rest of the application.
    fn emit_sync(&self, name: &str, payload: &Value);
}

/// Output volume control. Not every player exposes one.
pub trait VolumeControl: Send + Sync {
    /// Set the output volume.
    fn set_volume(&self, level: Volume);
}

/// A complete underlying player.
pub trait Player: PlaybackControl + PlaybackStatus + SyncEmitter {
    /// The volume control, if this player has one.
    fn volume_control(&self) -> Option<Arc<dyn VolumeControl>> {
        None
    }
}
