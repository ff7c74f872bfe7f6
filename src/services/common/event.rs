use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use parking_lot::Mutex;

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`Event::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// A typed, synchronous publish/subscribe event.
///
/// Listeners run on the publishing thread, in subscription order, and
/// `publish` returns only after every listener has returned.
pub struct Event<T> {
    listeners: Mutex<Vec<(SubscriptionId, Listener<T>)>>,
    next_id: AtomicUsize,
}

impl<T> Event<T> {
    /// Create an event with no listeners.
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
        }
    }

    /// Register a listener.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Deliver `value` to every listener.
    pub fn publish(&self, value: &T) {
        // Snapshot so listeners may (un)subscribe without deadlocking.
        let snapshot: Vec<Listener<T>> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(value);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

impl<T> Default for Event<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) -> Listener<String>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let make = move |tag: &str| -> Listener<String> {
            let sink = Arc::clone(&sink);
            let tag = tag.to_string();
            Arc::new(move |value: &String| sink.lock().push(format!("{tag}:{value}")))
        };
        (log, make)
    }

    #[test]
    fn publishes_in_subscription_order() {
        let event = Event::<String>::new();
        let (log, make) = recorder();
        let first = make("first");
        let second = make("second");
        event.subscribe(move |v| first(v));
        event.subscribe(move |v| second(v));

        event.publish(&"a".to_string());

        assert_eq!(*log.lock(), vec!["first:a", "second:a"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let event = Event::<String>::new();
        let (log, make) = recorder();
        let listener = make("only");
        let id = event.subscribe(move |v| listener(v));

        assert!(event.unsubscribe(id));
        assert!(!event.unsubscribe(id));

        event.publish(&"a".to_string());
        assert!(log.lock().is_empty());
        assert_eq!(event.listener_count(), 0);
    }

    #[test]
    fn listener_may_subscribe_during_publish() {
        let event = Arc::new(Event::<String>::new());
        let inner = Arc::clone(&event);
        event.subscribe(move |_| {
            inner.subscribe(|_| {});
        });

        event.publish(&"a".to_string());

        assert_eq!(event.listener_count(), 2);
    }
}
