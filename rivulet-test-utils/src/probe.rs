use rivulet_core::{Event, EventSink, EventSource};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Scripted source that observes how far its script actually runs.
///
/// Used to prove that a downstream stage cancelled upstream production:
/// after the run, [`delivered`](Self::delivered) tells how many `Next`
/// events went out and [`stopped_early`](Self::stopped_early) whether the
/// script was cut short by cancellation. Counters accumulate across runs,
/// so use one probe per subscription in tests.
///
/// Clones replay the same script and share the observation counters, so a
/// test can hand a clone to a consuming operator and keep the original
/// around for assertions.
pub struct ProbeSource<T, E> {
    script: Vec<Event<T, E>>,
    delivered: Arc<AtomicUsize>,
    stopped_early: Arc<AtomicBool>,
}

impl<T, E> Clone for ProbeSource<T, E>
where
    T: Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            script: self.script.clone(),
            delivered: Arc::clone(&self.delivered),
            stopped_early: Arc::clone(&self.stopped_early),
        }
    }
}

impl<T, E> ProbeSource<T, E>
where
    T: Clone,
    E: Clone,
{
    /// A probe that plays the given events verbatim, with no implicit
    /// terminal event.
    pub fn events(script: Vec<Event<T, E>>) -> Self {
        Self {
            script,
            delivered: Arc::new(AtomicUsize::new(0)),
            stopped_early: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A probe that plays `Next` for each value and then `Completed`.
    pub fn values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut script: Vec<Event<T, E>> = values.into_iter().map(Event::Next).collect();
        script.push(Event::Completed);
        Self::events(script)
    }

    /// How many `Next` events the probe handed to the sink so far.
    pub fn delivered(&self) -> usize {
        self.delivered.load(Ordering::Acquire)
    }

    /// Whether a run was cut short by cancellation before the script ended.
    pub fn stopped_early(&self) -> bool {
        self.stopped_early.load(Ordering::Acquire)
    }
}

impl<T, E> EventSource for ProbeSource<T, E>
where
    T: Clone,
    E: Clone,
{
    type Item = T;
    type Error = E;

    fn drive(&self, sink: EventSink<T, E>) {
        for event in &self.script {
            if sink.is_cancelled() {
                self.stopped_early.store(true, Ordering::Release);
                return;
            }
            if event.is_next() {
                self.delivered.fetch_add(1, Ordering::AcqRel);
            }
            sink.emit(event.clone());
        }
    }
}
