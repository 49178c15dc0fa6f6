// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `filter` operator for event sources.
pub trait FilterExt: EventSource + Sized {
    /// Passes only the values for which `predicate` returns `true`.
    ///
    /// # Behavior
    ///
    /// - Values failing the predicate are dropped without further effect
    /// - `Completed` and `Failed` pass through unchanged
    /// - The predicate sees every value that reaches this stage, in order
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{FilterExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(1..=6)
    ///     .filter(|value| value % 2 == 0)
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![2, 4, 6]);
    /// ```
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Clone + Send + 'static;
}

impl<S> FilterExt for S
where
    S: EventSource + Sized,
{
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Clone + Send + 'static,
    {
        Filter {
            source: self,
            predicate,
        }
    }
}

/// Source returned by [`FilterExt::filter`].
#[derive(Debug, Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> EventSource for Filter<S, P>
where
    S: EventSource,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
    P: Fn(&S::Item) -> bool + Clone + Send + 'static,
{
    type Item = S::Item;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<S::Item, S::Error>) {
        let predicate = self.predicate.clone();
        let upstream = EventSink::new(sink.token().child(), move |event| match event {
            Event::Next(value) => {
                if predicate(&value) {
                    sink.next(value);
                }
            }
            Event::Completed => sink.complete(),
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
