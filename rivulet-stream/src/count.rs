// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `count` operator for event sources.
pub trait CountExt: EventSource + Sized {
    /// Emits how many values the stream produced, at completion.
    ///
    /// Values themselves are consumed and dropped. An empty stream counts
    /// zero; a failing stream forwards its failure with no count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{CountExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec!["a", "b", "c"])
    ///     .count()
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![3]);
    /// ```
    fn count(self) -> Count<Self>;
}

impl<S> CountExt for S
where
    S: EventSource + Sized,
{
    fn count(self) -> Count<Self> {
        Count { source: self }
    }
}

/// Source returned by [`CountExt::count`].
#[derive(Debug, Clone)]
pub struct Count<S> {
    source: S,
}

impl<S> EventSource for Count<S>
where
    S: EventSource,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
{
    type Item = usize;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<usize, S::Error>) {
        let mut seen = 0usize;
        let upstream = EventSink::new(sink.token().child(), move |event| match event {
            Event::Next(_) => seen += 1,
            Event::Completed => {
                sink.next(seen);
                sink.complete();
            }
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
