use parking_lot::Mutex;
use rivulet_core::{Event, EventSink};
use std::sync::Arc;

/// Records every event a subscription delivers.
///
/// Hand [`consumer`](Self::consumer) to `subscribe` and inspect the recorded
/// sequence afterwards. Clones share the same recording.
pub struct Recorder<T, E> {
    events: Arc<Mutex<Vec<Event<T, E>>>>,
}

impl<T, E> Clone for Recorder<T, E> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<T, E> Default for Recorder<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Recorder<T, E> {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A consumer callback that appends every event to this recorder.
    pub fn consumer(&self) -> impl FnMut(Event<T, E>) + Send + 'static
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        let events = Arc::clone(&self.events);
        move |event| events.lock().push(event)
    }

    /// A sink over a fresh consumer, for driving a source by hand.
    pub fn sink(&self, token: rivulet_core::CancellationToken) -> EventSink<T, E>
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        EventSink::new(token, self.consumer())
    }

    /// Everything delivered so far, in delivery order.
    pub fn events(&self) -> Vec<Event<T, E>>
    where
        T: Clone,
        E: Clone,
    {
        self.events.lock().clone()
    }

    /// The `Next` payloads delivered so far, in delivery order.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::Next(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    /// The error of the `Failed` event, if one was delivered.
    pub fn failure(&self) -> Option<E>
    where
        E: Clone,
    {
        self.events.lock().iter().find_map(|event| match event {
            Event::Failed(error) => Some(error.clone()),
            _ => None,
        })
    }

    /// How many terminal events were delivered. Anything above one is a bug
    /// in the source under test.
    pub fn terminal_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| event.is_terminal())
            .count()
    }

    /// Whether a `Completed` event was delivered.
    pub fn completed(&self) -> bool {
        self.events
            .lock()
            .iter()
            .any(|event| matches!(event, Event::Completed))
    }

    /// Total number of delivered events.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether nothing was delivered.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}
