// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Completion, PassthroughSubject, Publisher, Sequence};
use rivulet_stream::PrefixExt;
use rivulet_test_utils::{record, Event, Probe, Recorder};

#[test]
fn test_prefix_forwards_limit_values_then_finishes() -> anyhow::Result<()> {
    // Arrange
    let numbers = Sequence::new(1..=10).prefix(3);

    // Act
    let recorder = record(&numbers);

    // Assert
    assert_eq!(
        recorder.events(),
        vec![
            Event::Value(1),
            Event::Value(2),
            Event::Value(3),
            Event::Completed(Completion::Finished),
        ]
    );

    Ok(())
}

#[test]
fn test_prefix_cancels_upstream_at_limit() -> anyhow::Result<()> {
    // Arrange
    let source = Probe::new(Sequence::new(1..=10));
    let stats = source.stats();
    let numbers = source.prefix(3);

    // Act
    let recorder = record(&numbers);

    // Assert
    assert_eq!(recorder.values(), vec![1, 2, 3]);
    assert_eq!(stats.values(), 3);
    assert_eq!(stats.cancellations(), 1);

    Ok(())
}

#[test]
fn test_prefix_on_unbounded_source_terminates() -> anyhow::Result<()> {
    // Arrange
    let numbers = Sequence::new(1u64..).prefix(5);

    // Act
    let recorder = record(&numbers);

    // Assert
    assert_eq!(recorder.values(), vec![1, 2, 3, 4, 5]);
    assert!(recorder.is_finished());

    Ok(())
}

#[test]
fn test_prefix_shorter_upstream_forwards_its_completion() -> anyhow::Result<()> {
    // Arrange
    let numbers = Sequence::new(1..=2).prefix(5);

    // Act
    let recorder = record(&numbers);

    // Assert
    assert_eq!(recorder.values(), vec![1, 2]);
    assert!(recorder.is_finished());
    assert_eq!(recorder.completion_count(), 1);

    Ok(())
}

#[test]
fn test_prefix_zero_never_subscribes_upstream() -> anyhow::Result<()> {
    // Arrange
    let source = Probe::new(Sequence::new(1..=3));
    let stats = source.stats();
    let numbers = source.prefix(0);

    // Act
    let recorder = record(&numbers);

    // Assert
    assert_eq!(recorder.events(), vec![Event::Completed(Completion::Finished)]);
    assert_eq!(stats.subscriptions(), 0);

    Ok(())
}

#[test]
fn test_prefix_detaches_from_subject_at_limit() -> anyhow::Result<()> {
    // Arrange
    let numbers = PassthroughSubject::<i32>::new();
    let recorder = Recorder::new();
    let _subscription = numbers.clone().prefix(2).subscribe(recorder.clone());

    // Act
    numbers.send(1);
    numbers.send(2);
    numbers.send(3);

    // Assert
    assert_eq!(recorder.values(), vec![1, 2]);
    assert!(recorder.is_finished());
    assert_eq!(numbers.subscriber_count(), 0);

    Ok(())
}
