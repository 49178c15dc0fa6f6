// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSource};
use rivulet_stream::{ScanExt, SequenceSource};
use rivulet_test_utils::{ProbeSource, Recorder, TestError};

#[test]
fn test_scan_emits_every_intermediate_accumulator() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::new(vec!["H", "E", "I"])
        .scan(String::new(), |acc, part| acc + part)
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(
        recorder.values(),
        vec!["H".to_string(), "HE".to_string(), "HEI".to_string()]
    );
    assert!(recorder.completed());
}

#[test]
fn test_scan_running_sum() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::new(vec![1, 2, 3, 4])
        .scan(0, |sum, value| sum + value)
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.values(), vec![1, 3, 6, 10]);
}

#[test]
fn test_scan_state_is_per_subscription() {
    // Arrange
    let summed = SequenceSource::new(vec![1, 1]).scan(0, |sum, value| sum + value);
    let first = Recorder::new();
    let second = Recorder::new();

    // Act
    let _one = summed.subscribe(first.consumer());
    let _two = summed.subscribe(second.consumer());

    // Assert: the second run started from the seed again
    assert_eq!(first.values(), vec![1, 2]);
    assert_eq!(second.values(), vec![1, 2]);
}

#[test]
fn test_scan_forwards_failure_unchanged() {
    // Arrange
    let recorder = Recorder::new();
    let source = ProbeSource::events(vec![
        Event::Next(1),
        Event::Next(2),
        Event::Failed(TestError("boom")),
    ]);

    // Act
    let _subscription = source
        .scan(0, |sum, value| sum + value)
        .subscribe(recorder.consumer());

    // Assert: accumulation stops at the failure
    assert_eq!(
        recorder.events(),
        vec![
            Event::Next(1),
            Event::Next(3),
            Event::Failed(TestError("boom"))
        ]
    );
}
