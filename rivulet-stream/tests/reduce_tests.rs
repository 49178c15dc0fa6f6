// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSource};
use rivulet_stream::{ReduceExt, SequenceSource};
use rivulet_test_utils::{ProbeSource, Recorder, TestError};

#[test]
fn test_reduce_emits_one_final_value_at_completion() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::new(vec![1, 2, 3, 4])
        .reduce(0, |sum, value| sum + value)
        .subscribe(recorder.consumer());

    // Assert: no intermediate state leaked out
    assert_eq!(recorder.events(), vec![Event::Next(10), Event::Completed]);
}

#[test]
fn test_reduce_of_empty_stream_yields_the_seed() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::empty()
        .reduce(42, |sum: i32, value: i32| sum + value)
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.events(), vec![Event::Next(42), Event::Completed]);
}

#[test]
fn test_reduce_discards_the_accumulator_on_failure() {
    // Arrange
    let recorder = Recorder::new();
    let source = ProbeSource::events(vec![
        Event::Next(1),
        Event::Next(2),
        Event::Failed(TestError("boom")),
    ]);

    // Act
    let _subscription = source
        .reduce(0, |sum, value| sum + value)
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.events(), vec![Event::Failed(TestError("boom"))]);
}
