// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSource};
use rivulet_stream::{IgnoreItemsExt, SequenceSource};
use rivulet_test_utils::{ProbeSource, Recorder, TestError};

#[test]
fn test_ignore_items_delivers_only_completion() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::new(1..=100)
        .ignore_items()
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.events(), vec![Event::Completed]);
}

#[test]
fn test_ignore_items_forwards_failure() {
    // Arrange
    let recorder = Recorder::new();
    let source = ProbeSource::events(vec![
        Event::Next(1),
        Event::Next(2),
        Event::Failed(TestError("boom")),
    ]);

    // Act
    let _subscription = source.ignore_items().subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.events(), vec![Event::Failed(TestError("boom"))]);
}

#[test]
fn test_ignore_items_still_consumes_the_whole_upstream() {
    // Arrange
    let probe = ProbeSource::<i32, TestError>::values(1..=5);
    let recorder = Recorder::new();

    // Act
    let _subscription = probe.clone().ignore_items().subscribe(recorder.consumer());

    // Assert: suppression happens at this stage, not by cancelling upstream
    assert_eq!(probe.delivered(), 5);
    assert!(!probe.stopped_early());
    assert_eq!(recorder.events(), vec![Event::Completed]);
}
