// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Completion, PassthroughSubject, Publisher};
use rivulet_stream::IgnoreOutputExt;
use rivulet_test_utils::{Event, Recorder, TestError};

#[test]
fn test_ignore_output_forwards_failure() -> anyhow::Result<()> {
    // Arrange
    let numbers = PassthroughSubject::<i32, TestError>::new();
    let recorder = Recorder::new();
    let _subscription = numbers.clone().ignore_output().subscribe(recorder.clone());

    // Act
    numbers.send(1);
    numbers.send(2);
    numbers.fail(TestError::boom("ignored"));

    // Assert
    assert_eq!(
        recorder.events(),
        vec![Event::Completed(Completion::Failed(TestError::boom("ignored")))]
    );

    Ok(())
}
