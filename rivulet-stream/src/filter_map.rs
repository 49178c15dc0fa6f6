// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `filter_map` operator for event sources.
pub trait FilterMapExt: EventSource + Sized {
    /// Transforms values with `f`, dropping those where `f` returns `None`.
    ///
    /// Combines [`map`](crate::MapExt::map) and
    /// [`filter`](crate::FilterExt::filter) in one pass: a `Some(mapped)`
    /// result is delivered as `Next(mapped)`, a `None` result vanishes
    /// without a trace. Terminal events pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{FilterMapExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec!["1", "two", "3"])
    ///     .filter_map(|text| text.parse::<i32>().ok())
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![1, 3]);
    /// ```
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F>
    where
        U: Send + 'static,
        F: Fn(Self::Item) -> Option<U> + Clone + Send + 'static;
}

impl<S> FilterMapExt for S
where
    S: EventSource + Sized,
{
    fn filter_map<U, F>(self, f: F) -> FilterMap<Self, F>
    where
        U: Send + 'static,
        F: Fn(Self::Item) -> Option<U> + Clone + Send + 'static,
    {
        FilterMap { source: self, f }
    }
}

/// Source returned by [`FilterMapExt::filter_map`].
#[derive(Debug, Clone)]
pub struct FilterMap<S, F> {
    source: S,
    f: F,
}

impl<S, U, F> EventSource for FilterMap<S, F>
where
    S: EventSource,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
    U: Send + 'static,
    F: Fn(S::Item) -> Option<U> + Clone + Send + 'static,
{
    type Item = U;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<U, S::Error>) {
        let f = self.f.clone();
        let upstream = EventSink::new(sink.token().child(), move |event| match event {
            Event::Next(value) => {
                if let Some(mapped) = f(value) {
                    sink.next(mapped);
                }
            }
            Event::Completed => sink.complete(),
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
