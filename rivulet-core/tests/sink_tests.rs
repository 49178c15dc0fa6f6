// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rivulet_core::{CancellationToken, Event, EventSink};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("boom")]
struct Boom;

fn recording_sink(token: CancellationToken) -> (EventSink<i32, Boom>, Arc<Mutex<Vec<Event<i32, Boom>>>>) {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let writer = Arc::clone(&recorded);
    let sink = EventSink::new(token, move |event| writer.lock().push(event));
    (sink, recorded)
}

#[test]
fn test_sink_delivers_in_order() {
    // Arrange
    let (sink, recorded) = recording_sink(CancellationToken::new());

    // Act
    sink.next(1);
    sink.next(2);
    sink.next(3);
    sink.complete();

    // Assert
    assert_eq!(
        *recorded.lock(),
        vec![
            Event::Next(1),
            Event::Next(2),
            Event::Next(3),
            Event::Completed
        ]
    );
}

#[test]
fn test_nothing_is_delivered_after_completion() {
    // Arrange
    let (sink, recorded) = recording_sink(CancellationToken::new());

    // Act
    sink.next(1);
    sink.complete();
    sink.next(2);
    sink.complete();
    sink.fail(Boom);

    // Assert
    assert_eq!(*recorded.lock(), vec![Event::Next(1), Event::Completed]);
}

#[test]
fn test_nothing_is_delivered_after_failure() {
    // Arrange
    let (sink, recorded) = recording_sink(CancellationToken::new());

    // Act
    sink.fail(Boom);
    sink.next(1);
    sink.complete();

    // Assert
    assert_eq!(*recorded.lock(), vec![Event::Failed(Boom)]);
}

#[test]
fn test_cancelled_sink_discards_everything() {
    // Arrange
    let token = CancellationToken::new();
    let (sink, recorded) = recording_sink(token.clone());

    // Act
    sink.next(1);
    token.cancel();
    sink.next(2);
    sink.complete();

    // Assert
    assert_eq!(*recorded.lock(), vec![Event::Next(1)]);
    assert!(!sink.is_terminated());
}

#[test]
fn test_clones_share_the_terminal_latch() {
    // Arrange
    let (sink, recorded) = recording_sink(CancellationToken::new());
    let clone = sink.clone();

    // Act
    clone.complete();
    sink.next(1);
    sink.fail(Boom);

    // Assert
    assert_eq!(*recorded.lock(), vec![Event::Completed]);
    assert!(sink.is_terminated());
    assert!(clone.is_terminated());
}

#[test]
fn test_is_cancelled_tracks_the_token() {
    let token = CancellationToken::new();
    let (sink, _recorded) = recording_sink(token.clone());

    assert!(!sink.is_cancelled());
    token.cancel();
    assert!(sink.is_cancelled());
}

#[test]
fn test_terminal_latch_trips_before_the_consumer_runs() {
    // Arrange: a consumer that answers completion by pushing into the sink
    // again through a clone.
    let token = CancellationToken::new();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let writer = Arc::clone(&recorded);
    let reentrant: Arc<Mutex<Option<EventSink<i32, Boom>>>> = Arc::new(Mutex::new(None));
    let reentrant_clone = Arc::clone(&reentrant);

    let sink = EventSink::new(token, move |event: Event<i32, Boom>| {
        let is_terminal = event.is_terminal();
        writer.lock().push(event);
        if is_terminal {
            if let Some(inner) = reentrant_clone.lock().as_ref() {
                inner.next(99);
                inner.fail(Boom);
            }
        }
    });
    *reentrant.lock() = Some(sink.clone());

    // Act
    sink.next(1);
    sink.complete();

    // Assert: the re-entrant emissions were swallowed by the latch
    assert_eq!(*recorded.lock(), vec![Event::Next(1), Event::Completed]);
}

#[test]
fn test_cancel_racing_a_concurrent_emitter_keeps_delivery_well_formed() {
    // Arrange: an emitter thread pushes through the sink while the owning
    // side cancels mid-run. Whatever gets through must be an ordered prefix
    // with at most one terminal event, never a value after a cancel the
    // emitter already observed.
    for _ in 0..100 {
        let token = CancellationToken::new();
        let (sink, recorded) = recording_sink(token.clone());

        // Act
        let emitter = std::thread::spawn(move || {
            for value in 0..1_000 {
                if sink.is_cancelled() {
                    return;
                }
                sink.next(value);
            }
            sink.complete();
        });
        token.cancel();
        emitter.join().expect("emitter thread panicked");

        // Assert
        let events = recorded.lock().clone();
        let values: Vec<i32> = events
            .iter()
            .filter_map(|event| match event {
                Event::Next(value) => Some(*value),
                _ => None,
            })
            .collect();
        assert!(values
            .iter()
            .enumerate()
            .all(|(index, value)| *value == i32::try_from(index).expect("index fits")));
        assert!(events.iter().filter(|event| event.is_terminal()).count() <= 1);
    }
}
