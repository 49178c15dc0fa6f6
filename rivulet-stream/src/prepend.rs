// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `prepend` operator for event sources.
pub trait PrependExt: EventSource + Sized {
    /// Delivers all of `head` before this source's own values.
    ///
    /// # Behavior
    ///
    /// - `head` runs to completion first; only then is the primary source
    ///   started
    /// - The combined stream completes when the primary does
    /// - A failure in either part is forwarded immediately; a head failure
    ///   means the primary never runs
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{PrependExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![8, 9])
    ///     .prepend(SequenceSource::new(vec![1, 2]))
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![1, 2, 8, 9]);
    /// ```
    fn prepend<S2>(self, head: S2) -> Prepend<Self, S2>
    where
        S2: EventSource<Item = Self::Item, Error = Self::Error>;
}

impl<S> PrependExt for S
where
    S: EventSource + Sized,
{
    fn prepend<S2>(self, head: S2) -> Prepend<Self, S2>
    where
        S2: EventSource<Item = Self::Item, Error = Self::Error>,
    {
        Prepend { source: self, head }
    }
}

/// Source returned by [`PrependExt::prepend`].
#[derive(Debug, Clone)]
pub struct Prepend<S, S2> {
    source: S,
    head: S2,
}

impl<S, S2> EventSource for Prepend<S, S2>
where
    S: EventSource + Clone + Send + 'static,
    S2: EventSource<Item = S::Item, Error = S::Error>,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
{
    type Item = S::Item;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<S::Item, S::Error>) {
        let source = self.source.clone();
        let lead = EventSink::new(sink.token().child(), move |event| match event {
            Event::Next(value) => sink.next(value),
            Event::Completed => {
                // Head exhausted, hand over to the primary source.
                let downstream = sink.clone();
                let main_sink =
                    EventSink::new(sink.token().child(), move |event| downstream.emit(event));
                source.drive(main_sink);
            }
            Event::Failed(error) => sink.fail(error),
        });
        self.head.drive(lead);
    }
}
