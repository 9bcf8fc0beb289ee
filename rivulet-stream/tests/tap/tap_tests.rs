// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rivulet_core::{Completion, PassthroughSubject, Publisher, Sequence};
use rivulet_stream::{FilterExt, TapExt};
use rivulet_test_utils::{record, Recorder, TestError};
use std::sync::Arc;

#[test]
fn test_tap_sees_values_before_downstream_operators() -> anyhow::Result<()> {
    // Arrange
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let evens = Sequence::new(1..=4)
        .tap(move |n| sink.lock().push(*n))
        .filter(|n| n % 2 == 0);

    // Act
    let recorder = record(&evens);

    // Assert
    assert_eq!(*seen.lock(), vec![1, 2, 3, 4]);
    assert_eq!(recorder.values(), vec![2, 4]);

    Ok(())
}

#[test]
fn test_tap_forwards_failure_untouched() -> anyhow::Result<()> {
    // Arrange
    let numbers = PassthroughSubject::<i32, TestError>::new();
    let recorder = Recorder::new();
    let _subscription = numbers.clone().tap(|_| {}).subscribe(recorder.clone());

    // Act
    numbers.send(1);
    numbers.fail(TestError::boom("tap"));

    // Assert
    assert_eq!(recorder.values(), vec![1]);
    assert_eq!(
        recorder.completion(),
        Some(Completion::Failed(TestError::boom("tap")))
    );

    Ok(())
}
