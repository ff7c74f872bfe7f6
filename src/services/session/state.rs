use std::fmt;

use crate::services::common::Property;

/// Connection to a listening room, as seen by the mediator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No active room
    Disconnected,
    /// Joining a room
    Connecting,
    /// In a room
    Connected,
}

impl ConnectionState {
    /// Whether there is a room (joined or being joined) to mediate for.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Disconnected)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "disconnected"),
            Self::Connecting => write!(f, "connecting"),
            Self::Connected => write!(f, "connected"),
        }
    }
}

/// Session flags owned by the network layer.
///
/// The network layer sets these; the mediator only reads them. Clones share
/// the same underlying values, and each flag can be watched as a stream.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Joined a room
    pub connected: Property<bool>,
    /// Joining a room
    pub connecting: Property<bool>,
    /// This participant is a host of the room
    pub is_host: Property<bool>,
    /// This participant may change the local volume while in a room
    pub can_change_volume: Property<bool>,
}

impl SessionState {
    /// A disconnected session.
    pub fn new() -> Self {
        Self {
            connected: Property::new(false),
            connecting: Property::new(false),
            is_host: Property::new(false),
            can_change_volume: Property::new(false),
        }
    }

    /// Tri-state view of `connected` and `connecting`. `connected` wins if both are set.
    pub fn connection(&self) -> ConnectionState {
        if self.connected.get() {
            ConnectionState::Connected
        } else if self.connecting.get() {
            ConnectionState::Connecting
        } else {
            ConnectionState::Disconnected
        }
    }

    /// Joined a room.
    pub fn is_connected(&self) -> bool {
        self.connected.get()
    }

    /// Host of the current room.
    pub fn is_host(&self) -> bool {
        self.is_host.get()
    }

    /// Allowed to change the local volume.
    pub fn can_change_volume(&self) -> bool {
        self.can_change_volume.get()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_tri_state() {
        let session = SessionState::new();
        assert_eq!(session.connection(), ConnectionState::Disconnected);
        assert!(!session.connection().is_active());

        session.connecting.set(true);
        assert_eq!(session.connection(), ConnectionState::Connecting);
        assert!(session.connection().is_active());

        session.connected.set(true);
        assert_eq!(session.connection(), ConnectionState::Connected);
    }

    #[test]
    fn clones_observe_network_updates() {
        let session = SessionState::new();
        let view = session.clone();

        session.is_host.set(true);

        assert!(view.is_host());
    }
}
