// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `take_items` operator for event sources.
pub trait TakeItemsExt: EventSource + Sized {
    /// Passes only the first `count` values, then completes on its own.
    ///
    /// # Behavior
    ///
    /// - The first `count` values pass through in order
    /// - Delivering the `count`-th value cancels the upstream run and emits
    ///   `Completed` downstream immediately; upstream completion is not
    ///   awaited
    /// - A stream shorter than `count` forwards its own terminal event
    /// - `take_items(0)` completes at once without consulting upstream
    /// - `Failed` before the limit is forwarded unchanged
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{SequenceSource, TakeItemsExt};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(1..=100)
    ///     .take_items(3)
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![1, 2, 3]);
    /// assert!(recorder.completed());
    /// ```
    fn take_items(self, count: usize) -> TakeItems<Self>;
}

impl<S> TakeItemsExt for S
where
    S: EventSource + Sized,
{
    fn take_items(self, count: usize) -> TakeItems<Self> {
        TakeItems {
            source: self,
            count,
        }
    }
}

/// Source returned by [`TakeItemsExt::take_items`].
#[derive(Debug, Clone)]
pub struct TakeItems<S> {
    source: S,
    count: usize,
}

impl<S> EventSource for TakeItems<S>
where
    S: EventSource,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
{
    type Item = S::Item;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<S::Item, S::Error>) {
        let count = self.count;
        if count == 0 {
            sink.complete();
            return;
        }

        // Cancelling only the upstream child keeps the downstream sink open
        // for the synthesized completion.
        let upstream_token = sink.token().child();
        let stop_upstream = upstream_token.clone();
        let mut taken = 0usize;
        let upstream = EventSink::new(upstream_token, move |event| match event {
            Event::Next(value) => {
                taken += 1;
                sink.next(value);
                if taken == count {
                    stop_upstream.cancel();
                    sink.complete();
                }
            }
            Event::Completed => sink.complete(),
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
