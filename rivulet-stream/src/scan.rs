// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `scan` operator for event sources.
pub trait ScanExt: EventSource + Sized {
    /// Folds values into a running accumulator, emitting every intermediate
    /// state.
    ///
    /// # Behavior
    ///
    /// - Starts from `seed`; each `Next(value)` updates the accumulator with
    ///   `f(accumulator, value)` and emits the new accumulator
    /// - The seed itself is never emitted
    /// - Accumulation state is per subscription; a second subscription starts
    ///   from `seed` again
    /// - `Completed` and `Failed` pass through unchanged
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{ScanExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec!["H", "E", "I"])
    ///     .scan(String::new(), |acc, part| acc + part)
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec!["H", "HE", "HEI"]);
    /// ```
    fn scan<A, F>(self, seed: A, f: F) -> Scan<Self, A, F>
    where
        A: Clone + Send + 'static,
        F: Fn(A, Self::Item) -> A + Clone + Send + 'static;
}

impl<S> ScanExt for S
where
    S: EventSource + Sized,
{
    fn scan<A, F>(self, seed: A, f: F) -> Scan<Self, A, F>
    where
        A: Clone + Send + 'static,
        F: Fn(A, Self::Item) -> A + Clone + Send + 'static,
    {
        Scan {
            source: self,
            seed,
            f,
        }
    }
}

/// Source returned by [`ScanExt::scan`].
#[derive(Debug, Clone)]
pub struct Scan<S, A, F> {
    source: S,
    seed: A,
    f: F,
}

impl<S, A, F> EventSource for Scan<S, A, F>
where
    S: EventSource,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
    A: Clone + Send + 'static,
    F: Fn(A, S::Item) -> A + Clone + Send + 'static,
{
    type Item = A;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<A, S::Error>) {
        let f = self.f.clone();
        let mut accumulator = self.seed.clone();
        let upstream = EventSink::new(sink.token().child(), move |event| match event {
            Event::Next(value) => {
                accumulator = f(accumulator.clone(), value);
                sink.next(accumulator.clone());
            }
            Event::Completed => sink.complete(),
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
