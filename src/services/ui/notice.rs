use std::fmt;

/// Rejection notices shown to guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Play, skip-next or skip-previous was rejected
    ChangeSongs,
    /// Pause was rejected
    PauseSongs,
    /// Resume was rejected
    ResumeSongs,
    /// Seek was rejected
    SeekSongs,
}

impl Notice {
    /// The exact message text.
    pub fn message(self) -> &'static str {
        match self {
            Self::ChangeSongs => "Only the hosts can change songs!",
            Self::PauseSongs => "Only the hosts can pause songs!",
            Self::ResumeSongs => "Only the hosts can resume songs!",
            Self::SeekSongs => "Only the hosts can seek songs!",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
