use serde_json::Value;
use tracing::debug;

use super::{Command, Mediator, Policy};
use crate::services::{Notice, PlayRequest, TrackKind};

impl Mediator {
    /// Play a context.
    ///
    /// Forced plays pass for guests too; a host's forced play mutes first.
    /// A rejected guest play asks the host for the track instead, unless the
    /// player issued it for a repeat.
    pub fn play(&self, request: &PlayRequest) {
        let playback = self.capabilities.playback();
        let forced = request.options.is_forced();

        let mut policy = Policy::new()
            .access(self.session.is_host() || forced)
            .notice(Notice::ChangeSongs)
            .on_restricted(|| {
                if request.options.repeat.is_some() {
                    return;
                }
                if let Some(uri) = self.requestable_uri(request) {
                    self.requests.request_song(uri);
                }
            });

        if forced {
            policy = policy.host_substitute(|| {
                self.requests.mute_before_play();
                playback.play(request);
            });
        }

        self.dispatch(Command::Play, policy, || playback.play(request));
    }

    /// Pause playback. A guest asks the host to pause at the current position.
    pub fn pause(&self) {
        let policy = Policy::new()
            .notice(Notice::PauseSongs)
            .on_restricted(|| {
                let progress = self.capabilities.status().progress_ms();
                self.requests.request_update_song(true, progress);
            });

        self.dispatch(Command::Pause, policy, || {
            self.capabilities.playback().pause()
        });
    }

    /// Resume playback. A guest asks the host to resume at the current position.
    pub fn resume(&self) {
        let policy = Policy::new()
            .notice(Notice::ResumeSongs)
            .on_restricted(|| {
                let progress = self.capabilities.status().progress_ms();
                self.requests.request_update_song(false, progress);
            });

        self.dispatch(Command::Resume, policy, || {
            self.capabilities.playback().resume()
        });
    }

    /// Seek in the current track.
    ///
    /// A guest asks the host to seek, keeping the current play/pause state.
    pub fn seek_to(&self, position_ms: u64) {
        let policy = Policy::new().notice(Notice::SeekSongs).on_restricted(|| {
            let paused = self.capabilities.status().is_paused();
            self.requests.request_update_song(paused, position_ms);
        });

        self.dispatch(Command::SeekTo, policy, || {
            self.capabilities.playback().seek_to(position_ms)
        });
    }

    /// Skip to the next track. Guests only get a notice.
    pub fn skip_to_next(&self, args: &Value) {
        let policy = Policy::new().notice(Notice::ChangeSongs);

        self.dispatch(Command::SkipToNext, policy, || {
            self.capabilities.playback().skip_to_next(args)
        });
    }

    /// Skip to the previous track.
    ///
    /// A guest near the start of a track still skips back; later in the track
    /// the command restarts it instead.
    pub fn skip_to_previous(&self, args: &Value) {
        let playback = self.capabilities.playback();
        let within_restart =
            self.capabilities.status().progress_ms() < self.settings.restart_threshold_ms;

        let mut policy = Policy::new().on_restricted(move || {
            if within_restart {
                playback.skip_to_previous(args);
            } else {
                playback.seek_to(0);
            }
        });
        if !within_restart {
            policy = policy.notice(Notice::ChangeSongs);
        }

        self.dispatch(Command::SkipToPrevious, policy, || {
            playback.skip_to_previous(args)
        });
    }

    fn requestable_uri<'r>(&self, request: &'r PlayRequest) -> Option<&'r str> {
        let listenable =
            |uri: &str| self.settings.is_listenable(TrackKind::from_uri(uri).as_str());

        // The skip_to fallback only applies to plays that name a context.
        let context = request.context_uri()?;
        let uri = Some(context)
            .filter(|uri| listenable(*uri))
            .or_else(|| request.skip_to_uri().filter(|uri| listenable(*uri)));

        if uri.is_none() {
            debug!(context = ?request.context_uri(), "Nothing listenable to request");
        }
        uri
    }
}
