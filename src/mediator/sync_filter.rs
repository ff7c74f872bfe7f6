use serde_json::Value;
use tracing::debug;

use crate::services::{PlaybackStatus, SessionState};

/// The `action` of a sync event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Playback of a new context started
    Play,
    /// Playback paused
    Pause,
    /// Playback resumed
    Resume,
    /// Any other action, or none
    Other,
}

impl SyncAction {
    /// Read the action from a payload.
    pub fn of(payload: &Value) -> Self {
        match payload.get("action").and_then(Value::as_str) {
            Some("play") => Self::Play,
            Some("pause") => Self::Pause,
            Some("resume") => Self::Resume,
            _ => Self::Other,
        }
    }
}

fn is_forced(payload: &Value) -> bool {
    payload.pointer("/options/forced") == Some(&Value::Bool(true))
}

/// Swallows a guest's local echo of state transitions the host already drives.
#[derive(Debug, Clone)]
pub struct SyncEventFilter {
    session: SessionState,
}

impl SyncEventFilter {
    /// Filter reading the given session.
    pub fn new(session: SessionState) -> Self {
        Self { session }
    }

    /// Whether the event must not reach the real emitter.
    ///
    /// Only connected guests are filtered: unforced plays, pauses while
    /// already paused and resumes while already playing are dropped.
    pub fn should_suppress(&self, payload: &Value, status: &dyn PlaybackStatus) -> bool {
        if !self.session.is_connected() || self.session.is_host() {
            return false;
        }

        let action = SyncAction::of(payload);
        let suppress = match action {
            SyncAction::Play => !is_forced(payload),
            SyncAction::Pause => status.is_paused(),
            SyncAction::Resume => !status.is_paused(),
            SyncAction::Other => false,
        };

        if suppress {
            debug!(?action, "Suppressed sync event");
        }
        suppress
    }
}
