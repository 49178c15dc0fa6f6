// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Finite source replaying an ordered collection.

use rivulet_core::{EventSink, EventSource};
use std::convert::Infallible;

/// Synchronous source over a fixed, ordered collection of values.
///
/// Every subscription replays the whole collection from the start: each
/// element is delivered as a `Next` event in collection order, followed by
/// `Completed`. Delivery happens entirely inside `subscribe`, so by the time
/// the handle is returned the consumer has already seen the full stream.
///
/// The source checks for cancellation before every delivery, which matters
/// when a downstream stage cuts the run short mid-replay.
///
/// # Examples
///
/// ```rust
/// use rivulet_core::{Event, EventSource};
/// use rivulet_stream::SequenceSource;
/// use rivulet_test_utils::Recorder;
///
/// let recorder = Recorder::new();
/// let _subscription = SequenceSource::new(vec!["H", "E", "I"]).subscribe(recorder.consumer());
///
/// assert_eq!(recorder.values(), vec!["H", "E", "I"]);
/// assert_eq!(
///     recorder.events().last(),
///     Some(&Event::Completed)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SequenceSource<T> {
    items: Vec<T>,
}

impl<T> SequenceSource<T> {
    /// Create a source over `items`, delivered in iteration order.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// Create a source that completes without delivering any value.
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of values a full replay delivers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether a replay delivers no values at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> EventSource for SequenceSource<T>
where
    T: Clone + Send + 'static,
{
    type Item = T;
    type Error = Infallible;

    fn drive(&self, sink: EventSink<T, Infallible>) {
        for item in &self.items {
            if sink.is_cancelled() {
                return;
            }
            sink.next(item.clone());
        }
        sink.complete();
    }
}
