// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Source that fails immediately.

use rivulet_core::{EventSink, EventSource};
use std::marker::PhantomData;

/// Source that delivers exactly one `Failed` event and nothing else.
///
/// Useful at API boundaries where a pipeline cannot even be started, for
/// example when a request locator cannot be built: the caller still gets an
/// ordinary stream, and the error travels the ordinary way.
///
/// # Examples
///
/// ```rust
/// use rivulet_core::{Event, EventSource};
/// use rivulet_stream::FailSource;
/// use rivulet_test_utils::Recorder;
///
/// let recorder = Recorder::new();
/// let source: FailSource<i32, &str> = FailSource::new("no locator");
/// let _subscription = source.subscribe(recorder.consumer());
///
/// assert_eq!(recorder.events(), vec![Event::Failed("no locator")]);
/// ```
#[derive(Debug)]
pub struct FailSource<T, E> {
    error: E,
    _marker: PhantomData<fn() -> T>,
}

impl<T, E> Clone for FailSource<T, E>
where
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            error: self.error.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, E> FailSource<T, E> {
    /// Create a source that fails every subscription with `error`.
    pub fn new(error: E) -> Self {
        Self {
            error,
            _marker: PhantomData,
        }
    }
}

impl<T, E> EventSource for FailSource<T, E>
where
    E: Clone,
{
    type Item = T;
    type Error = E;

    fn drive(&self, sink: EventSink<T, E>) {
        sink.fail(self.error.clone());
    }
}
