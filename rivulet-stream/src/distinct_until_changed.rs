// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `distinct_until_changed` operator for event
/// sources.
///
/// This operator filters out consecutive duplicate values, emitting only when
/// the value changes from the previous emission.
pub trait DistinctUntilChangedExt: EventSource + Sized {
    /// Emits values only when they differ from the previous emitted value.
    ///
    /// # Behavior
    ///
    /// - First value is always emitted (no previous value to compare)
    /// - Subsequent values are compared by equality to the last *emitted*
    ///   value, not the last seen one
    /// - A value equal to an earlier, non-adjacent value is still emitted
    /// - Comparison state is per subscription
    /// - `Completed` and `Failed` pass through unchanged
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{DistinctUntilChangedExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![1, 2, 3, 4, 1, 1, 1])
    ///     .distinct_until_changed()
    ///     .subscribe(recorder.consumer());
    ///
    /// // The trailing run of 1s collapses; the first 1 after 4 survives
    /// assert_eq!(recorder.values(), vec![1, 2, 3, 4, 1]);
    /// ```
    ///
    /// ## State Change Detection
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{DistinctUntilChangedExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![false, false, true, true, false])
    ///     .distinct_until_changed()
    ///     .subscribe(recorder.consumer());
    ///
    /// // Only the transitions remain
    /// assert_eq!(recorder.values(), vec![false, true, false]);
    /// ```
    fn distinct_until_changed(self) -> DistinctUntilChanged<Self>
    where
        Self::Item: PartialEq + Clone;
}

impl<S> DistinctUntilChangedExt for S
where
    S: EventSource + Sized,
{
    fn distinct_until_changed(self) -> DistinctUntilChanged<Self>
    where
        S::Item: PartialEq + Clone,
    {
        DistinctUntilChanged { source: self }
    }
}

/// Source returned by [`DistinctUntilChangedExt::distinct_until_changed`].
#[derive(Debug, Clone)]
pub struct DistinctUntilChanged<S> {
    source: S,
}

impl<S> EventSource for DistinctUntilChanged<S>
where
    S: EventSource,
    S::Item: PartialEq + Clone + Send + 'static,
    S::Error: Send + 'static,
{
    type Item = S::Item;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<S::Item, S::Error>) {
        let mut last_emitted: Option<S::Item> = None;
        let upstream = EventSink::new(
            sink.token().child(),
            move |event: Event<S::Item, S::Error>| match event {
                Event::Next(value) => {
                    let changed = match last_emitted.as_ref() {
                        None => true,
                        Some(previous) => value != *previous,
                    };
                    if changed {
                        last_emitted = Some(value.clone());
                        sink.next(value);
                    }
                }
                Event::Completed => sink.complete(),
                Event::Failed(error) => sink.fail(error),
            },
        );
        self.source.drive(upstream);
    }
}
