// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSource};
use rivulet_stream::{FirstExt, SequenceSource};
use rivulet_test_utils::{ProbeSource, Recorder, TestError};

#[test]
fn test_first_takes_one_value_and_completes() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::new(vec![7, 8, 9])
        .first()
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.events(), vec![Event::Next(7), Event::Completed]);
}

#[test]
fn test_first_cancels_upstream_immediately() {
    // Arrange
    let probe = ProbeSource::<i32, TestError>::values(1..=10);
    let recorder = Recorder::new();

    // Act
    let _subscription = probe.clone().first().subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.values(), vec![1]);
    assert_eq!(probe.delivered(), 1);
    assert!(probe.stopped_early());
}

#[test]
fn test_first_of_empty_stream_just_completes() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::<i32>::empty()
        .first()
        .subscribe(recorder.consumer());

    // Assert: completion only, no value
    assert_eq!(recorder.events(), vec![Event::Completed]);
}

#[test]
fn test_first_forwards_an_early_failure() {
    // Arrange
    let recorder = Recorder::new();
    let source: ProbeSource<i32, TestError> =
        ProbeSource::events(vec![Event::Failed(TestError("boom"))]);

    // Act
    let _subscription = source.first().subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.events(), vec![Event::Failed(TestError("boom"))]);
}
