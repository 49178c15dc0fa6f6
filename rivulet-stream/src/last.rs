// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `last` operator for event sources.
pub trait LastExt: EventSource + Sized {
    /// Emits only the final value, at completion.
    ///
    /// Keeps a buffer of size one, replaced on every arrival. On
    /// `Completed` the buffered value (if any) is emitted and the stream
    /// completes; an empty stream just completes. On `Failed` the buffer is
    /// discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{LastExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![7, 8, 9])
    ///     .last()
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![9]);
    /// ```
    fn last(self) -> Last<Self>;
}

impl<S> LastExt for S
where
    S: EventSource + Sized,
{
    fn last(self) -> Last<Self> {
        Last { source: self }
    }
}

/// Source returned by [`LastExt::last`].
#[derive(Debug, Clone)]
pub struct Last<S> {
    source: S,
}

impl<S> EventSource for Last<S>
where
    S: EventSource,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
{
    type Item = S::Item;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<S::Item, S::Error>) {
        let mut latest: Option<S::Item> = None;
        let upstream = EventSink::new(sink.token().child(), move |event| match event {
            Event::Next(value) => latest = Some(value),
            Event::Completed => {
                if let Some(value) = latest.take() {
                    sink.next(value);
                }
                sink.complete();
            }
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
