// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSource};
use rivulet_stream::{AllSatisfyExt, SequenceSource};
use rivulet_test_utils::{ProbeSource, Recorder, TestError};

#[test]
fn test_all_values_passing_yields_true() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::new(vec![2, 4, 6])
        .all_satisfy(|value| value % 2 == 0)
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.events(), vec![Event::Next(true), Event::Completed]);
}

#[test]
fn test_first_counterexample_short_circuits() {
    // Arrange
    let probe = ProbeSource::<i32, TestError>::values(vec![2, 3, 4, 6]);
    let recorder = Recorder::new();

    // Act
    let _subscription = probe
        .clone()
        .all_satisfy(|value| value % 2 == 0)
        .subscribe(recorder.consumer());

    // Assert: verdict delivered at the counterexample, upstream cut off
    assert_eq!(
        recorder.events(),
        vec![Event::Next(false), Event::Completed]
    );
    assert_eq!(recorder.terminal_count(), 1);
    assert_eq!(probe.delivered(), 2);
    assert!(probe.stopped_early());
}

#[test]
fn test_empty_stream_is_vacuously_true() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::<i32>::empty()
        .all_satisfy(|value| value % 2 == 0)
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.events(), vec![Event::Next(true), Event::Completed]);
}

#[test]
fn test_failure_preempts_the_verdict() {
    // Arrange
    let recorder = Recorder::new();
    let source = ProbeSource::events(vec![
        Event::Next(2),
        Event::Failed(TestError("boom")),
    ]);

    // Act
    let _subscription = source
        .all_satisfy(|value| value % 2 == 0)
        .subscribe(recorder.consumer());

    // Assert: no boolean is emitted, only the failure
    assert_eq!(recorder.events(), vec![Event::Failed(TestError("boom"))]);
}
