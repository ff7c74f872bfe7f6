/// Requests a guest sends to the room instead of acting locally.
pub trait SessionRequests: Send + Sync {
    /// Ask the host to play a track.
    fn request_song(&self, uri: &str);

    /// Ask the host to move playback to `position_ms`, paused or playing.
    fn request_update_song(&self, paused: bool, position_ms: u64);

    /// Briefly mute local output ahead of a forced play.
    fn mute_before_play(&self);
}
