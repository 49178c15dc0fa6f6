// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `reduce` operator for event sources.
pub trait ReduceExt: EventSource + Sized {
    /// Folds the whole stream into one value, emitted at completion.
    ///
    /// # Behavior
    ///
    /// - Accumulates silently; no intermediate state is ever emitted
    /// - On `Completed`, emits exactly one `Next` with the final accumulator
    ///   and then completes
    /// - An empty stream reduces to the seed
    /// - On `Failed`, the accumulator is discarded and only the failure is
    ///   delivered
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{ReduceExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![1, 2, 3, 4])
    ///     .reduce(0, |sum, value| sum + value)
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![10]);
    /// ```
    fn reduce<A, F>(self, seed: A, f: F) -> Reduce<Self, A, F>
    where
        A: Clone + Send + 'static,
        F: Fn(A, Self::Item) -> A + Clone + Send + 'static;
}

impl<S> ReduceExt for S
where
    S: EventSource + Sized,
{
    fn reduce<A, F>(self, seed: A, f: F) -> Reduce<Self, A, F>
    where
        A: Clone + Send + 'static,
        F: Fn(A, Self::Item) -> A + Clone + Send + 'static,
    {
        Reduce {
            source: self,
            seed,
            f,
        }
    }
}

/// Source returned by [`ReduceExt::reduce`].
#[derive(Debug, Clone)]
pub struct Reduce<S, A, F> {
    source: S,
    seed: A,
    f: F,
}

impl<S, A, F> EventSource for Reduce<S, A, F>
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
            }
            Event::Completed => {
                sink.next(accumulator.clone());
                sink.complete();
            }
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
