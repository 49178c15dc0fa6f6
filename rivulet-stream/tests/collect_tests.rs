// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Event, EventSource};
use rivulet_stream::{CollectExt, SequenceSource};
use rivulet_test_utils::{ProbeSource, Recorder, TestError};

#[test]
fn test_collect_buffers_everything_until_completion() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::new(vec![1, 2, 3])
        .collect()
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(
        recorder.events(),
        vec![Event::Next(vec![1, 2, 3]), Event::Completed]
    );
}

#[test]
fn test_collect_of_empty_stream_yields_empty_vec() {
    // Arrange
    let recorder = Recorder::new();

    // Act
    let _subscription = SequenceSource::<i32>::empty()
        .collect()
        .subscribe(recorder.consumer());

    // Assert
    assert_eq!(
        recorder.events(),
        vec![Event::Next(Vec::new()), Event::Completed]
    );
}

#[test]
fn test_collect_discards_the_buffer_on_failure() {
    // Arrange
    let recorder = Recorder::new();
    let source = ProbeSource::events(vec![
        Event::Next(1),
        Event::Next(2),
        Event::Failed(TestError("boom")),
    ]);

    // Act
    let _subscription = source.collect().subscribe(recorder.consumer());

    // Assert
    assert_eq!(recorder.events(), vec![Event::Failed(TestError("boom"))]);
}
