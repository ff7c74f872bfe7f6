//! User-facing collaborators: notifications and navigation.

mod notice;

pub use notice::Notice;

/// Fire-and-forget user notifications.
pub trait Notifier: Send + Sync {
    /// Show `message` to the user.
    fn notify(&self, message: &str);
}

/// Joins a room by identifier.
pub trait RoomJoiner: Send + Sync {
    /// Start joining `room_id`.
    fn join_room(&self, room_id: &str);
}

/// Application navigation history.
pub trait History: Send + Sync {
    /// Return to the previous location.
    fn go_back(&self);
}
