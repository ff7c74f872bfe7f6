use std::fmt;

use tracing::debug;

use crate::services::{Notice, SessionState};

/// A deferred piece of command handling.
pub type Hook<'a> = Box<dyn FnOnce() + 'a>;

/// Playback commands subject to gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start playing a context
    Play,
    /// Pause playback
    Pause,
    /// Resume playback
    Resume,
    /// Seek in the current track
    SeekTo,
    /// Skip to the next track
    SkipToNext,
    /// Skip to the previous track
    SkipToPrevious,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::SeekTo => "seek_to",
            Self::SkipToNext => "skip_to_next",
            Self::SkipToPrevious => "skip_to_previous",
        };
        f.write_str(name)
    }
}

/// Command-specific hooks fed to [`CommandGate::evaluate`].
#[derive(Default)]
pub struct Policy<'a> {
    access: Option<bool>,
    host_substitute: Option<Hook<'a>>,
    notice: Option<Notice>,
    on_restricted: Option<Hook<'a>>,
}

impl<'a> Policy<'a> {
    /// A policy that only forwards or rejects silently.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the host check with an explicit access decision.
    pub fn access(mut self, granted: bool) -> Self {
        self.access = Some(granted);
        self
    }

    /// Run `hook` instead of forwarding when access is granted.
    pub fn host_substitute(mut self, hook: impl FnOnce() + 'a) -> Self {
        self.host_substitute = Some(Box::new(hook));
        self
    }

    /// Notice shown when the command is rejected.
    pub fn notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    /// Compensating action run when the command is rejected.
    pub fn on_restricted(mut self, hook: impl FnOnce() + 'a) -> Self {
        self.on_restricted = Some(Box::new(hook));
        self
    }
}

/// What to do with an intercepted command.
pub enum Action<'a> {
    /// Call the real capability with the original arguments.
    Forward,
    /// Run the host-specific replacement instead.
    Substitute(Hook<'a>),
    /// Leave the player alone, notify and compensate.
    Reject {
        /// Notice to show, if any
        notice: Option<Notice>,
        /// Compensating action, if any
        on_restricted: Option<Hook<'a>>,
    },
}

impl Action<'_> {
    /// Short name for logging and assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Substitute(_) => "substitute",
            Self::Reject { .. } => "reject",
        }
    }
}

impl fmt::Debug for Action<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject { notice, on_restricted } => f
                .debug_struct("Reject")
                .field("notice", notice)
                .field("on_restricted", &on_restricted.is_some())
                .finish(),
            other => f.write_str(other.kind()),
        }
    }
}

/// Decides, for every gated command, whether it reaches the player.
#[derive(Debug, Clone)]
pub struct CommandGate {
    session: SessionState,
}

impl CommandGate {
    /// Gate reading the given session.
    pub fn new(session: SessionState) -> Self {
        Self { session }
    }

    /// Classify a command.
    ///
    /// Outside a room everything is forwarded. Inside one, access comes from
    /// the policy override or else the host flag.
    pub fn evaluate<'a>(&self, command: Command, policy: Policy<'a>) -> Action<'a> {
        let connection = self.session.connection();

        let action = if !connection.is_active() {
            Action::Forward
        } else if policy.access.unwrap_or_else(|| self.session.is_host()) {
            match policy.host_substitute {
                Some(hook) => Action::Substitute(hook),
                None => Action::Forward,
            }
        } else {
            Action::Reject {
                notice: policy.notice,
                on_restricted: policy.on_restricted,
            }
        };

        debug!(%command, %connection, action = action.kind(), "Command evaluated");
        action
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn session(connected: bool, connecting: bool, host: bool) -> SessionState {
        let session = SessionState::new();
        session.connected.set(connected);
        session.connecting.set(connecting);
        session.is_host.set(host);
        session
    }

    fn full_policy<'a>() -> Policy<'a> {
        Policy::new()
            .host_substitute(|| {})
            .notice(Notice::PauseSongs)
            .on_restricted(|| {})
    }

    #[test]
    fn disconnected_always_forwards() {
        for host in [false, true] {
            let gate = CommandGate::new(session(false, false, host));

            let action = gate.evaluate(Command::Pause, full_policy().access(false));

            assert_eq!(action.kind(), "forward");
        }
    }

    #[test]
    fn connecting_counts_as_active() {
        let gate = CommandGate::new(session(false, true, false));

        let action = gate.evaluate(Command::Resume, Policy::new());

        assert_eq!(action.kind(), "reject");
    }

    #[test]
    fn host_gets_substitute_when_supplied() {
        let gate = CommandGate::new(session(true, false, true));

        assert_eq!(gate.evaluate(Command::Play, full_policy()).kind(), "substitute");
        assert_eq!(gate.evaluate(Command::Play, Policy::new()).kind(), "forward");
    }

    #[test]
    fn guest_is_rejected_with_notice_and_compensation() {
        let gate = CommandGate::new(session(true, false, false));

        match gate.evaluate(Command::Pause, full_policy()) {
            Action::Reject {
                notice,
                on_restricted,
            } => {
                assert_eq!(notice, Some(Notice::PauseSongs));
                assert!(on_restricted.is_some());
            }
            other => panic!("expected reject, got {other:?}"),
        }
    }

    #[test]
    fn access_override_replaces_host_check() {
        let guest = CommandGate::new(session(true, false, false));
        let host = CommandGate::new(session(true, false, true));

        assert_eq!(
            guest.evaluate(Command::Play, Policy::new().access(true)).kind(),
            "forward"
        );
        assert_eq!(
            host.evaluate(Command::Play, Policy::new().access(false)).kind(),
            "reject"
        );
    }
}
