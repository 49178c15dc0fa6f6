// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `skip_items` operator for event sources.
pub trait SkipItemsExt: EventSource + Sized {
    /// Drops exactly the first `count` values by position.
    ///
    /// Values after the dropped prefix pass through untouched, as do
    /// terminal events. A stream shorter than `count` simply completes with
    /// no values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{SequenceSource, SkipItemsExt};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(1..=5)
    ///     .skip_items(2)
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![3, 4, 5]);
    /// ```
    fn skip_items(self, count: usize) -> SkipItems<Self>;
}

impl<S> SkipItemsExt for S
where
    S: EventSource + Sized,
{
    fn skip_items(self, count: usize) -> SkipItems<Self> {
        SkipItems {
            source: self,
            count,
        }
    }
}

/// Source returned by [`SkipItemsExt::skip_items`].
#[derive(Debug, Clone)]
pub struct SkipItems<S> {
    source: S,
    count: usize,
}

impl<S> EventSource for SkipItems<S>
where
    S: EventSource,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
{
    type Item = S::Item;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<S::Item, S::Error>) {
        let count = self.count;
        let mut skipped = 0usize;
        let upstream = EventSink::new(sink.token().child(), move |event| match event {
            Event::Next(value) => {
                if skipped < count {
                    skipped += 1;
                } else {
                    sink.next(value);
                }
            }
            Event::Completed => sink.complete(),
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
