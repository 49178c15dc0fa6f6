// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// A single occurrence delivered to a stream consumer.
///
/// A subscription observes zero or more `Next` events followed by exactly one
/// terminal event, either `Completed` or `Failed`. Nothing is ever delivered
/// after a terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<T, E> {
    /// A value produced by the source.
    Next(T),
    /// Successful end of the stream.
    Completed,
    /// An error that terminates the stream.
    Failed(E),
}

impl<T, E> Event<T, E> {
    /// Returns `true` if this is a `Next` value.
    pub const fn is_next(&self) -> bool {
        matches!(self, Event::Next(_))
    }

    /// Returns `true` if this event ends the stream.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Event::Completed | Event::Failed(_))
    }

    /// Converts from `Event<T, E>` to `Option<T>`, discarding terminal events.
    pub fn into_next(self) -> Option<T> {
        match self {
            Event::Next(value) => Some(value),
            _ => None,
        }
    }

    /// Converts from `Event<T, E>` to `Option<E>`, discarding everything else.
    pub fn into_failure(self) -> Option<E> {
        match self {
            Event::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Maps an `Event<T, E>` to `Event<U, E>` by applying a function to the
    /// contained value.
    ///
    /// Terminal events are propagated unchanged.
    pub fn map<U, F>(self, f: F) -> Event<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Event::Next(value) => Event::Next(f(value)),
            Event::Completed => Event::Completed,
            Event::Failed(error) => Event::Failed(error),
        }
    }

    /// Maps an `Event<T, E>` to `Event<T, F>` by applying a function to the
    /// contained error.
    ///
    /// Values and completion are propagated unchanged.
    pub fn map_failure<F2, F>(self, f: F) -> Event<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Event::Next(value) => Event::Next(value),
            Event::Completed => Event::Completed,
            Event::Failed(error) => Event::Failed(f(error)),
        }
    }
}

/// The terminal outcome of a stream, as seen by a completion callback.
///
/// [`subscribe_with`](crate::EventSource::subscribe_with) splits consumption
/// into a value callback and a completion callback; this enum is what the
/// completion callback receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion<E> {
    /// The stream ran out of values.
    Finished,
    /// The stream failed.
    Failed(E),
}

impl<E> Completion<E> {
    /// Returns `true` if the stream ended without an error.
    pub const fn is_finished(&self) -> bool {
        matches!(self, Completion::Finished)
    }

    /// Converts from `Completion<E>` to `Option<E>`, discarding success.
    pub fn into_failure(self) -> Option<E> {
        match self {
            Completion::Finished => None,
            Completion::Failed(error) => Some(error),
        }
    }
}
