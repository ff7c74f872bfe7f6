use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reference to a playable item, as carried by the player's state stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRef {
    /// Track identity.
    pub uri: String,
}

/// One update from the player's continuous state stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStateUpdate {
    /// The current item, absent when nothing is loaded.
    #[serde(default)]
    pub track: Option<TrackRef>,

    /// Remaining state fields, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlayerStateUpdate {
    /// Update for a loaded track.
    pub fn with_track(uri: impl Into<String>) -> Self {
        Self {
            track: Some(TrackRef { uri: uri.into() }),
            extra: Map::new(),
        }
    }

    /// Update with nothing loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The current track identity, if any.
    pub fn track_uri(&self) -> Option<&str> {
        self.track.as_ref().map(|track| track.uri.as_str())
    }
}

/// What a play command targets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayContext {
    /// Identity of the context (track, album, playlist...).
    #[serde(default)]
    pub uri: Option<String>,

    /// Remaining context fields, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Repeat flags the player attaches to its own internal play calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatOptions {
    /// Repeat the whole context.
    #[serde(default)]
    pub context: bool,

    /// Repeat the current track.
    #[serde(default)]
    pub track: bool,
}

/// Track to start from within a context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkipTo {
    /// Identity of the track to start at.
    #[serde(default)]
    pub uri: Option<String>,
}

/// Options of a play command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayOptions {
    /// Bypass role gating. Set for host-forced plays and auto-advance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced: Option<bool>,

    /// Present only on the player's own repeat-driven plays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RepeatOptions>,

    /// Track to start at inside the context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_to: Option<SkipTo>,

    /// Remaining options, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlayOptions {
    /// Whether the play was explicitly forced.
    pub fn is_forced(&self) -> bool {
        self.forced == Some(true)
    }

    /// Options with the forced flag set.
    pub fn forced() -> Self {
        Self {
            forced: Some(true),
            ..Self::default()
        }
    }
}

/// A play command with all its original arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayRequest {
    /// What to play.
    pub context: PlayContext,

    /// Where the command came from. Opaque to the mediator.
    #[serde(default)]
    pub origins: Value,

    /// Play options.
    #[serde(default)]
    pub options: PlayOptions,
}

impl PlayRequest {
    /// Play request for a single identity with default options.
    pub fn uri(uri: impl Into<String>) -> Self {
        Self {
            context: PlayContext {
                uri: Some(uri.into()),
                extra: Map::new(),
            },
            ..Self::default()
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: PlayOptions) -> Self {
        self.options = options;
        self
    }

    /// Identity of the play context.
    pub fn context_uri(&self) -> Option<&str> {
        self.context.uri.as_deref()
    }

    /// Identity of the `skip_to` track.
    pub fn skip_to_uri(&self) -> Option<&str> {
        self.options.skip_to.as_ref()?.uri.as_deref()
    }
}

/// Kind of item a track identity (`<scheme>:<kind>:<id>`) refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrackKind {
    /// A music track
    Track,
    /// A podcast episode
    Episode,
    /// A local file
    Local,
    /// An album
    Album,
    /// A playlist
    Playlist,
    /// An artist
    Artist,
    /// A podcast show
    Show,
    /// Anything else, with its raw kind segment
    Other(String),
}

impl TrackKind {
    /// Classify a track identity.
    pub fn from_uri(uri: &str) -> Self {
        let mut segments = uri.split(':');
        let _scheme = segments.next();

        match segments.next() {
            Some("user") if uri.contains(":playlist:") => Self::Playlist,
            Some(kind) => Self::from(kind),
            None => Self::Other(String::new()),
        }
    }

    /// Kind name as it appears in the identity.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Track => "track",
            Self::Episode => "episode",
            Self::Local => "local",
            Self::Album => "album",
            Self::Playlist => "playlist",
            Self::Artist => "artist",
            Self::Show => "show",
            Self::Other(kind) => kind.as_str(),
        }
    }
}

impl From<&str> for TrackKind {
    fn from(kind: &str) -> Self {
        match kind {
            "track" => Self::Track,
            "episode" => Self::Episode,
            "local" => Self::Local,
            "album" => Self::Album,
            "playlist" => Self::Playlist,
            "artist" => Self::Artist,
            "show" => Self::Show,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Volume of the player
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Volume(f64);

impl Volume {
    /// Create a volume clamped to `0.0..=1.0`
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }
}

impl Deref for Volume {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<f64> for Volume {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
