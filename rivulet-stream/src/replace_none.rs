// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSink, EventSource};

/// Extension trait providing the `replace_none` operator for sources of
/// optional values.
pub trait ReplaceNoneExt<U>: EventSource<Item = Option<U>> + Sized {
    /// Replaces every `None` value with a copy of `default`.
    ///
    /// The output stream carries plain `U` values: present values are
    /// unwrapped, absent ones are substituted. Terminal events pass through
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::EventSource;
    /// use rivulet_stream::{ReplaceNoneExt, SequenceSource};
    /// use rivulet_test_utils::Recorder;
    ///
    /// let recorder = Recorder::new();
    /// let _subscription = SequenceSource::new(vec![Some(1), None, Some(3)])
    ///     .replace_none(0)
    ///     .subscribe(recorder.consumer());
    ///
    /// assert_eq!(recorder.values(), vec![1, 0, 3]);
    /// ```
    fn replace_none(self, default: U) -> ReplaceNone<Self, U>
    where
        U: Clone + Send + 'static;
}

impl<S, U> ReplaceNoneExt<U> for S
where
    S: EventSource<Item = Option<U>> + Sized,
{
    fn replace_none(self, default: U) -> ReplaceNone<Self, U>
    where
        U: Clone + Send + 'static,
    {
        ReplaceNone {
            source: self,
            default,
        }
    }
}

/// Source returned by [`ReplaceNoneExt::replace_none`].
#[derive(Debug, Clone)]
pub struct ReplaceNone<S, U> {
    source: S,
    default: U,
}

impl<S, U> EventSource for ReplaceNone<S, U>
where
    S: EventSource<Item = Option<U>>,
    S::Error: Send + 'static,
    U: Clone + Send + 'static,
{
    type Item = U;
    type Error = S::Error;

    fn drive(&self, sink: EventSink<U, S::Error>) {
        let default = self.default.clone();
        let upstream = EventSink::new(
            sink.token().child(),
            move |event: Event<Option<U>, S::Error>| match event {
                Event::Next(value) => sink.next(value.unwrap_or_else(|| default.clone())),
                Event::Completed => sink.complete(),
                Event::Failed(error) => sink.fail(error),
            },
        );
        self.source.drive(upstream);
    }
}
