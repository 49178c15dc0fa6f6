// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `skip_while` operator for event sources.
pub trait SkipWhileExt: EventSource + Sized {
    /// Drops values until `predicate` first returns `false`, then passes
    /// everything.
    ///
    /// Once the gate opens it never closes again: later values matching the
    /// predicate are passed through untouched. Terminal events pass through
    /// unchanged in either phase.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{SequenceSource, SkipWhileExt};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![1, 2, 5, 1, 2])
    ///     .skip_while(|value| *value < 3)
    ///     .subscribe(recorder.consumer());
    ///
    /// // The trailing 1 and 2 arrive after the gate opened
    /// assert_eq!(recorder.values(), vec![5, 1, 2]);
    /// ```
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Clone + Send + 'static;
}

impl<S> SkipWhileExt for S
where
    S: EventSource + Sized,
{
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Clone + Send + 'static,
    {
        SkipWhile {
            source: self,
            predicate,
        }
    }
}

/// Source returned by [`SkipWhileExt::skip_while`].
#[derive(Debug, Clone)]
pub struct SkipWhile<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> EventSource for SkipWhile<S, P>
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
        let mut skipping = true;
        let upstream = EventSink::new(sink.token().child(), move |event| match event {
            Event::Next(value) => {
                if skipping && predicate(&value) {
                    return;
                }
                skipping = false;
                sink.next(value);
            }
            Event::Completed => sink.complete(),
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
