use std::{fmt, sync::Arc};

use super::{PlaybackControl, PlaybackStatus, Player, SyncEmitter, VolumeControl};

/// The player's original operations, captured once at mediator startup.
///
/// The bundle is immutable: the mediator holds it privately and hands out
/// shared references to the components that must reach the real player.
#[derive(Clone)]
pub struct PlayerCapabilities {
    playback: Arc<dyn PlaybackControl>,
    status: Arc<dyn PlaybackStatus>,
    emitter: Arc<dyn SyncEmitter>,
    volume: Option<Arc<dyn VolumeControl>>,
}

impl PlayerCapabilities {
    /// Capture every capability `player` exposes.
    pub fn capture<P: Player + 'static>(player: Arc<P>) -> Self {
        let volume = player.volume_control();

        Self {
            playback: Arc::clone(&player) as Arc<dyn PlaybackControl>,
            status: Arc::clone(&player) as Arc<dyn PlaybackStatus>,
            emitter: player as Arc<dyn SyncEmitter>,
            volume,
        }
    }

    /// Real playback commands.
    pub fn playback(&self) -> &dyn PlaybackControl {
        self.playback.as_ref()
    }

    /// Live progress and pause state.
    pub fn status(&self) -> &dyn PlaybackStatus {
        self.status.as_ref()
    }

    /// The real sync event emitter.
    pub fn emitter(&self) -> &dyn SyncEmitter {
        self.emitter.as_ref()
    }

    /// The real volume control, if the player has one.
    pub fn volume(&self) -> Option<&dyn VolumeControl> {
        self.volume.as_deref()
    }
}

impl fmt::Debug for PlayerCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerCapabilities")
            .field("volume", &self.volume.is_some())
            .finish_non_exhaustive()
    }
}
