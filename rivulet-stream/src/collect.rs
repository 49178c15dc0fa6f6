// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `collect` operator for event sources.
pub trait CollectExt: EventSource + Sized {
    /// Buffers every value and emits them as one `Vec` at completion.
    ///
    /// # Behavior
    ///
    /// - Values are buffered in arrival order and never delivered
    ///   individually
    /// - On `Completed`, emits one `Next` with the full buffer, then
    ///   completes; an empty stream collects into an empty `Vec`
    /// - On `Failed`, the buffer is discarded and only the failure is
    ///   delivered
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{CollectExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![1, 2, 3])
    ///     .collect()
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![vec![1, 2, 3]]);
    /// ```
    fn collect(self) -> Collect<Self>;
}

impl<S> CollectExt for S
where
    S: EventSource + Sized,
{
    fn collect(self) -> Collect<Self> {
        Collect { source: self }
    }
}

/// Source returned by [`CollectExt::collect`].
#[derive(Debug, Clone)]
pub struct Collect<S> {
    source: S,
}

impl<S> EventSource for Collect<S>
where
    S: EventSource,
    S::Item: Send + 'static,
    S::Error: Send + 'static,
{
    type Item = Vec<S::Item>;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<Vec<S::Item>, S::Error>) {
        let mut buffer = Vec::new();
        let upstream = EventSink::new(sink.token().child(), move |event| match event {
            Event::Next(value) => buffer.push(value),
            Event::Completed => {
                sink.next(std::mem::take(&mut buffer));
                sink.complete();
            }
            Event::Failed(error) => sink.fail(error),
        });
        self.source.drive(upstream);
    }
}
