// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Completion, PassthroughSubject, Publisher};
use rivulet_stream::RemoveDuplicatesExt;
use rivulet_test_utils::{Recorder, TestError};

#[test]
fn test_remove_duplicates_forwards_failure() -> anyhow::Result<()> {
    // Arrange
    let numbers = PassthroughSubject::<i32, TestError>::new();
    let recorder = Recorder::new();
    let _subscription = numbers
        .clone()
        .remove_duplicates()
        .subscribe(recorder.clone());

    // Act
    numbers.send(5);
    numbers.send(5);
    numbers.fail(TestError::boom("dedup"));

    // Assert
    assert_eq!(recorder.values(), vec![5]);
    assert_eq!(
        recorder.completion(),
        Some(Completion::Failed(TestError::boom("dedup")))
    );
    assert_eq!(recorder.completion_count(), 1);

    Ok(())
}
