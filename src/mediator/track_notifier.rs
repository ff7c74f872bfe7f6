use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use tracing::{debug, instrument, trace};

use crate::services::{Event, PlayerStateUpdate};

/// Turns the player's state stream into discrete track-change events.
#[derive(Debug, Default)]
pub struct TrackChangeNotifier {
    last_uri: Mutex<Option<String>>,
    changed: Event<String>,
}

impl TrackChangeNotifier {
    /// Notifier with no baseline yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fired with the new identity (empty when nothing is loaded) on every change.
    pub fn track_changed(&self) -> &Event<String> {
        &self.changed
    }

    /// Handle one state update. Returns whether a change was published.
    ///
    /// Every update becomes the new baseline, changed or not.
    pub fn observe(&self, update: &PlayerStateUpdate) -> bool {
        let current = update.track_uri();

        let changed = {
            let mut last = self.last_uri.lock();
            let changed = last.as_deref() != current;
            *last = current.map(str::to_string);
            changed
        };

        trace!(uri = current.unwrap_or_default(), changed, "State update observed");

        if changed {
            let identity = current.unwrap_or_default().to_string();
            debug!(uri = %identity, "Track changed");
            self.changed.publish(&identity);
        }

        changed
    }

    /// Consume a state stream in delivery order until it ends.
    ///
    /// Empty deliveries (`None`) are skipped and leave the baseline untouched.
    #[instrument(skip_all)]
    pub async fn run<S>(&self, updates: S)
    where
        S: Stream<Item = Option<PlayerStateUpdate>>,
    {
        let mut updates = std::pin::pin!(updates);

        while let Some(delivery) = updates.next().await {
            if let Some(update) = delivery {
                self.observe(&update);
            }
        }

        debug!("State stream ended");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn recording(notifier: &TrackChangeNotifier) -> Arc<Mutex<Vec<String>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        notifier
            .track_changed()
            .subscribe(move |uri: &String| sink.lock().push(uri.clone()));
        seen
    }

    #[test]
    fn deduplicates_consecutive_identities() {
        let notifier = TrackChangeNotifier::new();
        let seen = recording(&notifier);

        for uri in ["A", "A", "B", "B", "B", "A"] {
            notifier.observe(&PlayerStateUpdate::with_track(uri));
        }

        assert_eq!(*seen.lock(), vec!["A", "B", "A"]);
    }

    #[test]
    fn leaving_and_entering_no_track_are_changes() {
        let notifier = TrackChangeNotifier::new();
        let seen = recording(&notifier);

        assert!(!notifier.observe(&PlayerStateUpdate::empty()));
        assert!(notifier.observe(&PlayerStateUpdate::with_track("A")));
        assert!(notifier.observe(&PlayerStateUpdate::empty()));
        assert!(!notifier.observe(&PlayerStateUpdate::empty()));

        assert_eq!(*seen.lock(), vec!["A", ""]);
    }

    #[tokio::test]
    async fn run_skips_empty_deliveries() {
        let notifier = TrackChangeNotifier::new();
        let seen = recording(&notifier);
        let updates = futures::stream::iter(vec![
            Some(PlayerStateUpdate::with_track("A")),
            None,
            Some(PlayerStateUpdate::with_track("A")),
            Some(PlayerStateUpdate::with_track("B")),
        ]);

        notifier.run(updates).await;

        assert_eq!(*seen.lock(), vec!["A", "B"]);
    }
}
