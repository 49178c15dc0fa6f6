// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{CancellationToken, Event};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Guarded delivery funnel between a source and one consumer.
///
/// Every event a source (or transform stage) produces goes through
/// [`emit`](Self::emit), which enforces the two delivery invariants of the
/// whole engine in one place:
///
/// - Nothing is delivered after the subscription's token is cancelled.
/// - Nothing is delivered after a terminal event; the first terminal event
///   trips a latch shared by all clones of the sink.
///
/// Sinks are cheap to clone; all clones share the same consumer, latch and
/// token, so a source may hand copies to helper tasks without weakening
/// either invariant.
pub struct EventSink<T, E> {
    consumer: Arc<Mutex<Box<dyn FnMut(Event<T, E>) + Send>>>,
    terminated: Arc<AtomicBool>,
    token: CancellationToken,
}

impl<T, E> Clone for EventSink<T, E> {
    fn clone(&self) -> Self {
        Self {
            consumer: Arc::clone(&self.consumer),
            terminated: Arc::clone(&self.terminated),
            token: self.token.clone(),
        }
    }
}

impl<T, E> EventSink<T, E> {
    /// Create a sink that forwards events to `consumer`, guarded by `token`.
    pub fn new<F>(token: CancellationToken, consumer: F) -> Self
    where
        F: FnMut(Event<T, E>) + Send + 'static,
    {
        Self {
            consumer: Arc::new(Mutex::new(Box::new(consumer))),
            terminated: Arc::new(AtomicBool::new(false)),
            token,
        }
    }

    /// Deliver one event to the consumer, subject to the delivery guard.
    ///
    /// Cancelled or already-terminated sinks silently discard the event. A
    /// terminal event closes the sink before the consumer sees it, so even a
    /// consumer that re-enters the sink cannot observe a second terminal.
    pub fn emit(&self, event: Event<T, E>) {
        // Lock-free check first: a re-entrant emission from inside the
        // consumer must bounce off the latch without touching the lock.
        if self.token.is_cancelled() || self.terminated.load(Ordering::Acquire) {
            return;
        }
        let mut consumer = self.consumer.lock();
        // Re-checked under the lock: a cancel that raced the check above
        // still suppresses the event.
        if self.token.is_cancelled() || self.terminated.load(Ordering::Acquire) {
            return;
        }
        if event.is_terminal() && self.terminated.swap(true, Ordering::AcqRel) {
            return;
        }
        (*consumer)(event);
    }

    /// Deliver a value.
    pub fn next(&self, value: T) {
        self.emit(Event::Next(value));
    }

    /// Deliver successful completion and close the sink.
    pub fn complete(&self) {
        self.emit(Event::Completed);
    }

    /// Deliver a failure and close the sink.
    pub fn fail(&self, error: E) {
        self.emit(Event::Failed(error));
    }

    /// The cancellation token guarding this sink.
    ///
    /// Transform stages derive their upstream token from this one with
    /// [`CancellationToken::child`], so cancelling the subscription reaches
    /// the source while a stage can still cut off its upstream without
    /// silencing its own deliveries.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Check whether the guarding token has been cancelled.
    ///
    /// Synchronous sources poll this between deliveries so a consumer that
    /// cancels mid-stream stops production immediately.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Check whether a terminal event has already been delivered.
    pub fn is_terminated(&self) -> bool {
        self.terminated.load(Ordering::Acquire)
    }
}
