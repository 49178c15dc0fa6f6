// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `first` operator for event sources.
pub trait FirstExt: EventSource + Sized {
    /// Passes the first value, then completes on its own.
    ///
    /// Delivering the value cancels the upstream run; upstream completion is
    /// not awaited. An empty stream just completes, a failing one forwards
    /// its failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{FirstExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![7, 8, 9])
    ///     .first()
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![7]);
    /// assert!(recorder.completed());
    /// ```
    fn first(self) -> First<Self>;
}

impl<S> FirstExt for S
where
    S: EventSource + Sized,
{
    fn first(self) -> First<Self> {
        First { source: self }
    }
}

/// Source returned by [`FirstExt::first`].
#[derive(Debug, Clone)]
pub struct First<S> {
    source: S,
}

impl<S> EventSource for First<S>
where
    S: EventSource,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
{
    type Item = S::Item;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<S::Item, S::Error>) {
        let upstream_token = sink.token().child();
        let stop_upstream = upstream_token.clone();
        let upstream = EventSink::new(upstream_token, move |event| match event {
            Event::Next(value) => {
                stop_upstream.cancel();
                sink.next(value);
                sink.complete();
            }
            Event::Completed => sink.complete(),
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
