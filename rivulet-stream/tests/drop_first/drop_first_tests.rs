// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{PassthroughSubject, Publisher, Sequence};
use rivulet_stream::DropFirstExt;
use rivulet_test_utils::{record, values_of, Recorder};

#[test]
fn test_drop_first_zero_forwards_everything() -> anyhow::Result<()> {
    // Arrange
    let numbers = Sequence::new(1..=4).drop_first(0);

    // Act
    let values = values_of(&numbers);

    // Assert
    assert_eq!(values, vec![1, 2, 3, 4]);

    Ok(())
}

#[test]
fn test_drop_first_exact_length_forwards_completion_only() -> anyhow::Result<()> {
    // Arrange
    let numbers = Sequence::new(1..=4).drop_first(4);

    // Act
    let recorder = record(&numbers);

    // Assert
    assert_eq!(recorder.value_count(), 0);
    assert!(recorder.is_finished());

    Ok(())
}

#[test]
fn test_drop_first_beyond_length_forwards_completion_only() -> anyhow::Result<()> {
    // Arrange
    let numbers = Sequence::new(1..=4).drop_first(10);

    // Act
    let recorder = record(&numbers);

    // Assert
    assert_eq!(recorder.value_count(), 0);
    assert!(recorder.is_finished());

    Ok(())
}

#[test]
fn test_drop_first_counts_per_subscription() -> anyhow::Result<()> {
    // Arrange
    let numbers = PassthroughSubject::<i32>::new();
    let first = Recorder::new();
    let second = Recorder::new();
    let skipping = numbers.clone().drop_first(2);
    let _first_subscription = skipping.subscribe(first.clone());

    // Act
    numbers.send(1);
    numbers.send(2);
    numbers.send(3);
    let _second_subscription = skipping.subscribe(second.clone());
    numbers.send(4);
    numbers.send(5);
    numbers.send(6);

    // Assert
    assert_eq!(first.values(), vec![3, 4, 5, 6]);
    assert_eq!(second.values(), vec![6]);

    Ok(())
}
