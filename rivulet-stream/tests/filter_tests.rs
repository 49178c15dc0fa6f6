// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSource};
use rivulet_stream::{FilterExt, SequenceSource};
use rivulet_test_utils::{ProbeSource, Recorder, TestError};

#[test]
fn test_filter_keeps_only_matching_values() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::new(1..=6)
        .filter(|value| value % 2 == 0)
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.values(), vec![2, 4, 6]);
    assert!(recorder.completed());
}

#[test]
fn test_filter_rejecting_everything_still_completes() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::new(1..=5)
        .filter(|_| false)
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.events(), vec![Event::Completed]);
}

#[test]
fn test_filter_forwards_failure_unchanged() {
    // Arrange
    let recorder = Recorder::new();
    let source = ProbeSource::events(vec![
        Event::Next(1),
        Event::Next(2),
        Event::Failed(TestError("boom")),
    ]);

    // Act
    let _subscription = source
        .filter(|value| value % 2 == 0)
        .subscribe(recorder.consumer());

    // Assert: the rejected 1 is gone, the failure is not
    assert_eq!(
        recorder.events(),
        vec![Event::Next(2), Event::Failed(TestError("boom"))]
    );
}
