// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `append` operator for event sources.
pub trait AppendExt: EventSource + Sized {
    /// Continues with `tail` after this source completes.
    ///
    /// # Behavior
    ///
    /// - All primary values are delivered first, then all of `tail`'s
    /// - The tail is only started once the primary completes; the combined
    ///   stream completes when the tail does
    /// - A failure in either part is forwarded immediately; a primary
    ///   failure means the tail never runs
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{AppendExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![1, 2])
    ///     .append(SequenceSource::new(vec![8, 9]))
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![1, 2, 8, 9]);
    /// ```
    fn append<S2>(self, tail: S2) -> Append<Self, S2>
    where
        S2: EventSource<Item = Self::Item, Error = Self::Error>;
}

impl<S> AppendExt for S
where
    S: EventSource + Sized,
{
    fn append<S2>(self, tail: S2) -> Append<Self, S2>
    where
        S2: EventSource<Item = Self::Item, Error = Self::Error>,
    {
        Append { source: self, tail }
    }
}

/// Source returned by [`AppendExt::append`].
#[derive(Debug, Clone)]
pub struct Append<S, S2> {
    source: S,
    tail: S2,
}

impl<S, S2> EventSource for Append<S, S2>
where
    S: EventSource,
    S2: EventSource<Item = S::Item, Error = S::Error> + Clone + Send + 'static,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
{
    type Item = S::Item;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<S::Item, S::Error>) {
        let tail = self.tail.clone();
        let upstream = EventSink::new(sink.token().child(), move |event| match event {
            Event::Next(value) => sink.next(value),
            Event::Completed => {
                // Primary exhausted, relay the continuation into the same
                // downstream sink.
                let downstream = sink.clone();
                let tail_sink =
                    EventSink::new(sink.token().child(), move |event| downstream.emit(event));
                tail.drive(tail_sink);
            }
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
