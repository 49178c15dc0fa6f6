// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{EventSink, EventSource};

/// Extension trait providing the `map` operator for event sources.
pub trait MapExt: EventSource + Sized {
    /// Transforms every value with `f`, leaving terminal events untouched.
    ///
    /// # Behavior
    ///
    /// - Each `Next(value)` becomes `Next(f(value))`, in the original order
    /// - `Completed` and `Failed` pass through unchanged
    /// - `f` runs once per value, at delivery time, per subscription
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{MapExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![1, 2, 3])
    ///     .map(|value| value * 10)
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![10, 20, 30]);
    /// ```
    ///
    /// Changing the value type is equally fine:
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{MapExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![1, 22, 333])
    ///     .map(|value: i32| value.to_string())
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec!["1", "22", "333"]);
    /// ```
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        U: Send + 'static,
        F: Fn(Self::Item) -> U + Clone + Send + 'static;
}

impl<S> MapExt for S
where
    S: EventSource + Sized,
{
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        U: Send + 'static,
        F: Fn(Self::Item) -> U + Clone + Send + 'static,
    {
        Map { source: self, f }
    }
}

/// Source returned by [`MapExt::map`].
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    f: F,
}

impl<S, U, F> EventSource for Map<S, F>
where
    S: EventSource,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
    U: Send + 'static,
    F: Fn(S::Item) -> U + Clone + Send + 'static,
{
    type Item = U;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<U, S::Error>) {
        let f = self.f.clone();
        let upstream = EventSink::new(sink.token().child(), move |event| {
            sink.emit(event.map(&f));
        });
        self.source.drive(upstream);
    }
}
