// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{CancellationToken, Completion, Event, EventSink, Subscription};
use std::sync::Arc;

/// A producer of ordered events.
///
/// An `EventSource` describes a stream: zero or more values in a defined
/// order, terminated by exactly one completion or failure. Subscribing
/// starts one independent production run; sources are re-subscribable and
/// every run gets fresh per-run state.
///
/// Implementors provide [`drive`](Self::drive), the object-safe primitive
/// that feeds one run into a prepared [`EventSink`]. Consumers call
/// [`subscribe`](Self::subscribe) or
/// [`subscribe_with`](Self::subscribe_with), which wrap the consumer in a
/// guarded sink, drive the source and hand back the [`Subscription`] handle.
///
/// # Example
///
/// ```
/// use rivulet_core::{Event, EventSink, EventSource};
///
/// struct Once(i32);
///
/// impl EventSource for Once {
///     type Item = i32;
///     type Error = std::convert::Infallible;
///
///     fn drive(&self, sink: EventSink<i32, Self::Error>) {
///         sink.next(self.0);
///         sink.complete();
///     }
/// }
///
/// let collected = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
/// let writer = collected.clone();
/// let _sub = Once(7).subscribe(move |event| writer.lock().push(event));
/// assert_eq!(*collected.lock(), vec![Event::Next(7), Event::Completed]);
/// ```
pub trait EventSource {
    /// The values this source produces.
    type Item;
    /// The error this source can fail with.
    type Error;

    /// Feed one production run into `sink`.
    ///
    /// Implementations must route every emission through the sink so the
    /// delivery guard can enforce ordering, exactly-once termination and
    /// cancellation. Synchronous sources finish delivery before returning;
    /// asynchronous sources may hand the sink to a task and return at once.
    fn drive(&self, sink: EventSink<Self::Item, Self::Error>);

    /// Start a run, delivering every [`Event`] to `consumer`.
    ///
    /// The returned handle cancels the run; see [`Subscription`]. For a
    /// synchronous source all delivery happens before this method returns.
    fn subscribe<F>(&self, consumer: F) -> Subscription
    where
        Self: Sized,
        F: FnMut(Event<Self::Item, Self::Error>) + Send + 'static,
    {
        let token = CancellationToken::new();
        let sink = EventSink::new(token.clone(), consumer);
        self.drive(sink);
        Subscription::new(token)
    }

    /// Start a run with separate value and completion callbacks.
    ///
    /// `on_next` receives every value; `on_completion` receives the single
    /// terminal outcome as a [`Completion`].
    fn subscribe_with<N, C>(&self, mut on_next: N, mut on_completion: C) -> Subscription
    where
        Self: Sized,
        N: FnMut(Self::Item) + Send + 'static,
        C: FnMut(Completion<Self::Error>) + Send + 'static,
    {
        self.subscribe(move |event| match event {
            Event::Next(value) => on_next(value),
            Event::Completed => on_completion(Completion::Finished),
            Event::Failed(error) => on_completion(Completion::Failed(error)),
        })
    }

    /// Erase the concrete source type.
    ///
    /// Useful at API boundaries where different pipelines must share one
    /// return type, such as a client that yields either a real request or an
    /// immediate failure.
    fn boxed(self) -> BoxSource<Self::Item, Self::Error>
    where
        Self: Sized + Send + Sync + 'static,
    {
        BoxSource::new(self)
    }
}

/// A type-erased, cheaply clonable [`EventSource`].
pub struct BoxSource<T, E> {
    inner: Arc<dyn EventSource<Item = T, Error = E> + Send + Sync>,
}

impl<T, E> BoxSource<T, E> {
    /// Erase `source` behind a shared pointer.
    pub fn new<S>(source: S) -> Self
    where
        S: EventSource<Item = T, Error = E> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(source),
        }
    }
}

impl<T, E> Clone for BoxSource<T, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, E> EventSource for BoxSource<T, E> {
    type Item = T;
    type Error = E;

    fn drive(&self, sink: EventSink<T, E>) {
        self.inner.drive(sink);
    }
}
