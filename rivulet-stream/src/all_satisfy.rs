// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `all_satisfy` operator for event sources.
pub trait AllSatisfyExt: EventSource + Sized {
    /// Reports whether every value satisfies `predicate`, as a single
    /// boolean.
    ///
    /// # Behavior
    ///
    /// - The first failing value short-circuits: the upstream run is
    ///   cancelled, `Next(false)` and `Completed` are emitted immediately
    /// - If upstream completes with no value having failed, emits
    ///   `Next(true)` then `Completed`
    /// - An empty stream is vacuously `true`
    /// - `Failed` is forwarded unchanged; no verdict is emitted
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{AllSatisfyExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![2, 4, 6])
    ///     .all_satisfy(|value| value % 2 == 0)
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![true]);
    /// ```
    fn all_satisfy<P>(self, predicate: P) -> AllSatisfy<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Clone + Send + 'static;
}

impl<S> AllSatisfyExt for S
where
    S: EventSource + Sized,
{
    fn all_satisfy<P>(self, predicate: P) -> AllSatisfy<Self, P>
    where
        P: Fn(&Self::Item) -> bool + Clone + Send + 'static,
    {
        AllSatisfy {
            source: self,
            predicate,
        }
    }
}

/// Source returned by [`AllSatisfyExt::all_satisfy`].
#[derive(Debug, Clone)]
pub struct AllSatisfy<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> EventSource for AllSatisfy<S, P>
where
    S: EventSource,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
    P: Fn(&S::Item) -> bool + Clone + Send + 'static,
{
    type Item = bool;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<bool, S::Error>) {
        let predicate = self.predicate.clone();
        let upstream_token = sink.token().child();
        let stop_upstream = upstream_token.clone();
        let upstream = EventSink::new(upstream_token, move |event| match event {
            Event::Next(value) => {
                if !predicate(&value) {
                    stop_upstream.cancel();
                    sink.next(false);
                    sink.complete();
                }
            }
            Event::Completed => {
                sink.next(true);
                sink.complete();
            }
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
