// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Single-flight request coordinator.

use crate::api::BooksApi;
use crate::book::{Book, BookList};
use crate::error::FetchError;
use parking_lot::Mutex;
use rivulet_core::{Event, EventSource, Subscription};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, trace};

/// Coordinator-visible state, published after every applied event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibrarySnapshot {
    /// The most recently fetched list, `None` until a fetch succeeds.
    pub books: Option<Vec<Book>>,
    /// The error of the most recent failed fetch, cleared by a later
    /// success.
    pub last_error: Option<FetchError>,
}

enum RequestState {
    Idle,
    InFlight(Subscription),
}

struct LaneEvent {
    generation: u64,
    event: Event<BookList, FetchError>,
}

/// Single-flight coordinator over a [`BooksApi`].
///
/// At most one request is outstanding at any time: [`load_books`]
/// cancels the previous subscription before starting a new one, so a
/// superseded request never reaches coordinator state. Every event hops
/// from the transport task into one spawned delivery lane, which alone
/// mutates the published [`LibrarySnapshot`]; delivery is therefore
/// serialized by construction, no matter which threads resolve the
/// transport calls.
///
/// Errors are surfaced, never retried; the next explicit
/// [`load_books`] call is the only recovery path. Cancellation of a
/// superseded request is silent.
///
/// [`load_books`]: Self::load_books
pub struct Library {
    api: Arc<dyn BooksApi>,
    state: Arc<Mutex<RequestState>>,
    generation: Arc<AtomicU64>,
    lane: mpsc::UnboundedSender<LaneEvent>,
    snapshot: watch::Receiver<LibrarySnapshot>,
}

impl Library {
    /// Build a coordinator over `api` and spawn its delivery lane.
    ///
    /// Must be called from within a Tokio runtime. The lane shuts down
    /// when the `Library` is dropped.
    pub fn new(api: Arc<dyn BooksApi>) -> Self {
        let (lane, mut events) = mpsc::unbounded_channel::<LaneEvent>();
        let (publish, snapshot) = watch::channel(LibrarySnapshot::default());
        let state = Arc::new(Mutex::new(RequestState::Idle));
        let generation = Arc::new(AtomicU64::new(0));

        let lane_state = Arc::clone(&state);
        let current_generation = Arc::clone(&generation);
        tokio::spawn(async move {
            while let Some(LaneEvent { generation, event }) = events.recv().await {
                // A superseded run's events are inert even when they were
                // queued before the cancellation landed.
                if generation != current_generation.load(Ordering::Acquire) {
                    debug!(generation, "dropping stale event");
                    continue;
                }
                match event {
                    Event::Next(list) => {
                        publish.send_modify(|snapshot| {
                            snapshot.books = Some(list.results);
                            snapshot.last_error = None;
                        });
                    }
                    Event::Completed => {
                        *lane_state.lock() = RequestState::Idle;
                    }
                    Event::Failed(error) => {
                        debug!(%error, "fetch failed");
                        *lane_state.lock() = RequestState::Idle;
                        publish.send_modify(|snapshot| snapshot.last_error = Some(error));
                    }
                }
            }
            trace!("delivery lane shut down");
        });

        Self {
            api,
            state,
            generation,
            lane,
            snapshot,
        }
    }

    /// Start a fresh fetch, superseding any in-flight one.
    ///
    /// Never blocks on I/O: the critical section is a short lock hold, the
    /// transport call itself runs on its own task. The superseded request's
    /// callbacks are never applied.
    pub fn load_books(&self) {
        let mut state = self.state.lock();
        if let RequestState::InFlight(handle) = &*state {
            debug!("superseding in-flight request");
            handle.cancel();
        }

        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let lane = self.lane.clone();
        let subscription = self.api.get_books().subscribe(move |event| {
            // Delivery failure only happens when the library is being
            // dropped; the event is moot then.
            let _ = lane.send(LaneEvent { generation, event });
        });
        *state = RequestState::InFlight(subscription);
    }

    /// The currently published state.
    pub fn snapshot(&self) -> LibrarySnapshot {
        self.snapshot.borrow().clone()
    }

    /// A receiver notified after every published change.
    ///
    /// This is the explicit change-notification surface a presentation
    /// layer subscribes to; there is no implicit binding.
    pub fn watch(&self) -> watch::Receiver<LibrarySnapshot> {
        self.snapshot.clone()
    }

    /// Whether a request is currently outstanding.
    pub fn in_flight(&self) -> bool {
        matches!(&*self.state.lock(), RequestState::InFlight(_))
    }
}
