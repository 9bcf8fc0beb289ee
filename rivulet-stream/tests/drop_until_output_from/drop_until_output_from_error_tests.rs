// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Completion, PassthroughSubject, Publisher};
use rivulet_stream::DropUntilOutputFromExt;
use rivulet_test_utils::{Event, Recorder, TestError};

#[test]
fn test_drop_until_output_from_control_failure_before_open_is_forwarded() -> anyhow::Result<()> {
    // Arrange
    let taps = PassthroughSubject::<i32, TestError>::new();
    let ready = PassthroughSubject::<(), TestError>::new();
    let recorder = Recorder::new();
    let _subscription = taps
        .clone()
        .drop_until_output_from(ready.clone())
        .subscribe(recorder.clone());

    // Act
    taps.send(1);
    ready.fail(TestError::boom("control"));
    taps.send(2);

    // Assert
    assert_eq!(
        recorder.events(),
        vec![Event::Completed(Completion::Failed(TestError::boom(
            "control"
        )))]
    );
    assert_eq!(taps.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_drop_until_output_from_upstream_failure_is_forwarded() -> anyhow::Result<()> {
    // Arrange
    let taps = PassthroughSubject::<i32, TestError>::new();
    let ready = PassthroughSubject::<(), TestError>::new();
    let recorder = Recorder::new();
    let _subscription = taps
        .clone()
        .drop_until_output_from(ready.clone())
        .subscribe(recorder.clone());

    // Act
    ready.send(());
    taps.send(1);
    taps.fail(TestError::boom("upstream"));

    // Assert
    assert_eq!(
        recorder.events(),
        vec![
            Event::Value(1),
            Event::Completed(Completion::Failed(TestError::boom("upstream"))),
        ]
    );

    Ok(())
}
