// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Completion, PassthroughSubject, Publisher};
use rivulet_stream::PrefixWhileExt;
use rivulet_test_utils::{Recorder, TestError};

#[test]
fn test_prefix_while_forwards_failure_while_predicate_holds() -> anyhow::Result<()> {
    // Arrange
    let numbers = PassthroughSubject::<i32, TestError>::new();
    let recorder = Recorder::new();
    let _subscription = numbers
        .clone()
        .prefix_while(|n| *n > 0)
        .subscribe(recorder.clone());

    // Act
    numbers.send(1);
    numbers.fail(TestError::boom("while"));

    // Assert
    assert_eq!(recorder.values(), vec![1]);
    assert_eq!(
        recorder.completion(),
        Some(Completion::Failed(TestError::boom("while")))
    );

    Ok(())
}
