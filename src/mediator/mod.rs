//! Command gating and synchronization between room participants and the player.
//!
//! [`Mediator`] is the single entry point: the host application routes every
//! playback command, every outgoing sync event, every state update and every
//! navigation through it. Outside a room it is transparent.

mod commands;
mod gate;
mod room_link;
mod sync_filter;
mod track_notifier;

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

pub use gate::{Action, Command, CommandGate, Hook, Policy};
pub use room_link::{RoomLinkInterceptor, parse_room_link};
pub use sync_filter::{SyncAction, SyncEventFilter};
pub use track_notifier::TrackChangeNotifier;

use crate::{
    config::{Config, GateConfig},
    services::{
        Event, History, Notifier, Player, PlayerCapabilities, PlayerStateUpdate, RoomJoiner,
        SessionRequests, SessionState, Volume,
    },
};

/// External collaborators the mediator calls out to.
#[derive(Clone)]
pub struct Collaborators {
    /// Requests sent to the room on a guest's behalf
    pub requests: Arc<dyn SessionRequests>,
    /// User notifications
    pub notifier: Arc<dyn Notifier>,
    /// Room joining
    pub joiner: Arc<dyn RoomJoiner>,
    /// Navigation history
    pub history: Arc<dyn History>,
}

/// Sits between command origin and the underlying player.
pub struct Mediator {
    capabilities: PlayerCapabilities,
    session: SessionState,
    requests: Arc<dyn SessionRequests>,
    notifier: Arc<dyn Notifier>,
    gate: CommandGate,
    sync_filter: SyncEventFilter,
    track_notifier: TrackChangeNotifier,
    room_link: RoomLinkInterceptor,
    settings: GateConfig,
}

impl Mediator {
    /// Capture the player's capabilities and wire every component.
    pub fn new<P: Player + 'static>(
        player: Arc<P>,
        session: SessionState,
        collaborators: Collaborators,
        config: &Config,
    ) -> Self {
        let capabilities = PlayerCapabilities::capture(player);
        debug!(?capabilities, "Player capabilities captured");

        Self {
            gate: CommandGate::new(session.clone()),
            sync_filter: SyncEventFilter::new(session.clone()),
            track_notifier: TrackChangeNotifier::new(),
            room_link: RoomLinkInterceptor::new(
                config.room_link.route_keyword.clone(),
                collaborators.joiner,
                collaborators.history,
            ),
            capabilities,
            session,
            requests: collaborators.requests,
            notifier: collaborators.notifier,
            settings: config.gate.clone(),
        }
    }

    /// The session this mediator reads.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Fired with the new track identity whenever the current track changes.
    pub fn track_changed(&self) -> &Event<String> {
        self.track_notifier.track_changed()
    }

    /// The track change notifier, for driving it from a state stream.
    pub fn track_notifier(&self) -> &TrackChangeNotifier {
        &self.track_notifier
    }

    /// Whether volume changes are mediated. False when the player has no volume control.
    pub fn mediates_volume(&self) -> bool {
        self.capabilities.volume().is_some()
    }

    /// Set the output volume.
    ///
    /// Outside a room, or with volume permission, the change is forwarded.
    /// Otherwise it is dropped without a notice.
    pub fn set_volume(&self, level: Volume) {
        let Some(volume) = self.capabilities.volume() else {
            trace!("Player has no volume control");
            return;
        };

        if !self.session.is_connected() || self.session.can_change_volume() {
            volume.set_volume(level);
        } else {
            debug!(level = *level, "Dropped volume change");
        }
    }

    /// Route one of the player's outgoing sync events.
    pub fn emit_sync(&self, name: &str, payload: &Value) {
        if self
            .sync_filter
            .should_suppress(payload, self.capabilities.status())
        {
            return;
        }

        self.capabilities.emitter().emit_sync(name, payload);
    }

    /// Feed one player state update to the track change notifier.
    pub fn on_state_update(&self, update: &PlayerStateUpdate) {
        self.track_notifier.observe(update);
    }

    /// Feed a navigation. Returns whether it was a join-room link.
    pub fn on_navigate(&self, pathname: Option<&str>) -> bool {
        self.room_link.on_navigate(pathname)
    }

    fn dispatch(&self, command: Command, policy: Policy<'_>, forward: impl FnOnce()) {
        match self.gate.evaluate(command, policy) {
            Action::Forward => forward(),
            Action::Substitute(hook) => hook(),
            Action::Reject {
                notice,
                on_restricted,
            } => {
                if let Some(notice) = notice {
                    self.notifier.notify(notice.message());
                }
                if let Some(hook) = on_restricted {
                    hook();
                }
            }
        }
    }
}
