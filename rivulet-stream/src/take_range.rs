// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};
use std::ops::{Bound, RangeBounds};

/// Extension trait providing the `take_range` operator for event sources.
pub trait TakeRangeExt: EventSource + Sized {
    /// Passes only the values whose zero-based arrival index falls in
    /// `range`.
    ///
    /// # Behavior
    ///
    /// - Indices count every value arriving at this stage, including the
    ///   ones outside the range
    /// - Once no further index can fall in `range`, the upstream run is
    ///   cancelled and `Completed` is emitted downstream immediately
    /// - An unbounded range end never triggers the early completion
    /// - A range containing no index at all completes at subscribe without
    ///   consuming any upstream value
    /// - A stream ending before the range does forwards its own terminal
    ///   event
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{SequenceSource, TakeRangeExt};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![10, 20, 30, 40, 50])
    ///     .take_range(1..=2)
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![20, 30]);
    /// ```
    ///
    /// A range reaching past the end of the stream takes what is there:
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{SequenceSource, TakeRangeExt};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(1..=7)
    ///     .take_range(5..=20)
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![6, 7]);
    /// ```
    fn take_range<R>(self, range: R) -> TakeRange<Self, R>
    where
        R: RangeBounds<usize> + Clone + Send + 'static;
}

impl<S> TakeRangeExt for S
where
    S: EventSource + Sized,
{
    fn take_range<R>(self, range: R) -> TakeRange<Self, R>
    where
        R: RangeBounds<usize> + Clone + Send + 'static,
    {
        TakeRange {
            source: self,
            range,
        }
    }
}

/// Source returned by [`TakeRangeExt::take_range`].
#[derive(Debug, Clone)]
pub struct TakeRange<S, R> {
    source: S,
    range: R,
}

impl<S, R> EventSource for TakeRange<S, R>
where
    S: EventSource,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
    R: RangeBounds<usize> + Clone + Send + 'static,
{
    type Item = S::Item;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<S::Item, S::Error>) {
        let range = self.range.clone();
        let end = self.range.end_bound().cloned();
        let start = match self.range.start_bound() {
            Bound::Included(&first) => first,
            Bound::Excluded(&first) => first.saturating_add(1),
            Bound::Unbounded => 0,
        };
        // A range that contains no index completes without consuming
        // anything, the same way `take_items(0)` does.
        let vacant = match end {
            Bound::Included(last) => last < start,
            Bound::Excluded(first_out) => first_out <= start,
            Bound::Unbounded => false,
        };
        if vacant {
            sink.complete();
            return;
        }
        let upstream_token = sink.token().child();
        let stop_upstream = upstream_token.clone();
        let mut index = 0usize;
        let upstream = EventSink::new(upstream_token, move |event| match event {
            Event::Next(value) => {
                let current = index;
                index += 1;
                if range.contains(&current) {
                    sink.next(value);
                }
                let exhausted = match end {
                    Bound::Included(last) => current >= last,
                    Bound::Excluded(first_out) => current + 1 >= first_out,
                    Bound::Unbounded => false,
                };
                if exhausted {
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
