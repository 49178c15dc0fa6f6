// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};
use std::cmp::Ordering;

/// Extension trait providing the `min_by` operator for event sources.
pub trait MinByExt: EventSource + Sized {
    /// Emits the minimum value under `compare`, at completion.
    ///
    /// # Behavior
    ///
    /// - Tracks a single running minimum; no buffering of the stream
    /// - Among equal minima the earlier arrival wins, matching
    ///   [`Iterator::min_by`]
    /// - An empty stream completes without a value
    /// - On `Failed` the running minimum is discarded
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{MinByExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![3, 9, 1, 6])
    ///     .min_by(|a, b| a.cmp(b))
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![1]);
    /// ```
    fn min_by<C>(self, compare: C) -> MinBy<Self, C>
    where
        C: Fn(&Self::Item, &Self::Item) -> Ordering + Clone + Send + 'static;
}

impl<S> MinByExt for S
where
    S: EventSource + Sized,
{
    fn min_by<C>(self, compare: C) -> MinBy<Self, C>
    where
        C: Fn(&Self::Item, &Self::Item) -> Ordering + Clone + Send + 'static,
    {
        MinBy {
            source: self,
            compare,
        }
    }
}

/// Source returned by [`MinByExt::min_by`].
#[derive(Debug, Clone)]
pub struct MinBy<S, C> {
    source: S,
    compare: C,
}

impl<S, C> EventSource for MinBy<S, C>
where
    S: EventSource,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
    C: Fn(&S::Item, &S::Item) -> Ordering + Clone + Send + 'static,
{
    type Item = S::Item;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<S::Item, S::Error>) {
        let compare = self.compare.clone();
        let mut best: Option<S::Item> = None;
        let upstream = EventSink::new(sink.token().child(), move |event| match event {
            Event::Next(value) => match best.as_mut() {
                None => best = Some(value),
                Some(current) => {
                    if compare(&value, current) == Ordering::Less {
                        *current = value;
                    }
                }
            },
            Event::Completed => {
                if let Some(value) = best.take() {
                    sink.next(value);
                }
                sink.complete();
            }
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
