// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSource};
use rivulet_stream::{MinByExt, SequenceSource};
use rivulet_test_utils::{ProbeSource, Recorder, TestError};

#[test]
fn test_min_by_emits_the_minimum_at_completion() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::new(vec![3, 9, 1, 6])
        .min_by(|a, b| a.cmp(b))
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.events(), vec![Event::Next(1), Event::Completed]);
}

#[test]
fn test_among_equal_minima_the_earlier_wins() {
    // Arrange
    let recorder = Recorder::new();
    let entries = vec![(3, "big"), (1, "early"), (1, "late"), (4, "bigger")];

    // Act
    let _subscription = SequenceSource::new(entries)
        .min_by(|a, b| a.0.cmp(&b.0))
        .subscribe(recorder.consumer());

    // Assert: same tie rule as Iterator::min_by
    assert_eq!(recorder.values(), vec![(1, "early")]);
}

#[test]
fn test_min_by_of_empty_stream_just_completes() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::<i32>::empty()
        .min_by(|a, b| a.cmp(b))
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.events(), vec![Event::Completed]);
}

#[test]
fn test_min_by_discards_its_candidate_on_failure() {
    // Arrange
    let recorder = Recorder::new();
    let source = ProbeSource::events(vec![
        Event::Next(5),
        Event::Failed(TestError("boom")),
    ]);

    // Act
    let _subscription = source
        .min_by(|a, b| a.cmp(b))
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.events(), vec![Event::Failed(TestError("boom"))]);
}
