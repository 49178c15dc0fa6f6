// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `ignore_items` operator for event sources.
pub trait IgnoreItemsExt: EventSource + Sized {
    /// Suppresses every value, keeping only the terminal event.
    ///
    /// Useful when only the outcome of a stream matters: the consumer sees
    /// a bare `Completed` or `Failed`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::{Event, EventSource};
    /// use rivulet_stream::{IgnoreItemsExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(1..=100)
    ///     .ignore_items()
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.events(), vec![Event::Completed]);
    /// ```
    fn ignore_items(self) -> IgnoreItems<Self>;
}

impl<S> IgnoreItemsExt for S
where
    S: EventSource + Sized,
{
    fn ignore_items(self) -> IgnoreItems<Self> {
        IgnoreItems { source: self }
    }
}

/// Source returned by [`IgnoreItemsExt::ignore_items`].
#[derive(Debug, Clone)]
pub struct IgnoreItems<S> {
    source: S,
}

impl<S> EventSource for IgnoreItems<S>
where
    S: EventSource,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
{
    type Item = S::Item;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<S::Item, S::Error>) {
        let upstream = EventSink::new(sink.token().child(), move |event| match event {
            Event::Next(_) => {}
            Event::Completed => sink.complete(),
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
