// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Completion, PassthroughSubject, Publisher};
use rivulet_stream::PrefixUntilOutputFromExt;
use rivulet_test_utils::{Event, Recorder, TestError};

#[test]
fn test_prefix_until_output_from_control_failure_is_forwarded() -> anyhow::Result<()> {
    // Arrange
    let taps = PassthroughSubject::<i32, TestError>::new();
    let stop = PassthroughSubject::<(), TestError>::new();
    let recorder = Recorder::new();
    let _subscription = taps
        .clone()
        .prefix_until_output_from(stop.clone())
        .subscribe(recorder.clone());

    // Act
    taps.send(1);
    stop.fail(TestError::boom("control"));
    taps.send(2);

    // Assert
    assert_eq!(
        recorder.events(),
        vec![
            Event::Value(1),
            Event::Completed(Completion::Failed(TestError::boom("control"))),
        ]
    );
    assert_eq!(taps.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_prefix_until_output_from_upstream_failure_is_forwarded() -> anyhow::Result<()> {
    // Arrange
    let taps = PassthroughSubject::<i32, TestError>::new();
    let stop = PassthroughSubject::<(), TestError>::new();
    let recorder = Recorder::new();
    let _subscription = taps
        .clone()
        .prefix_until_output_from(stop.clone())
        .subscribe(recorder.clone());

    // Act
    taps.fail(TestError::boom("upstream"));

    // Assert
    assert_eq!(
        recorder.completion(),
        Some(Completion::Failed(TestError::boom("upstream")))
    );
    assert_eq!(stop.subscriber_count(), 0);

    Ok(())
}
