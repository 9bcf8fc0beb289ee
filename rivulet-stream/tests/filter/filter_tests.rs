// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Completion, PassthroughSubject, Publisher, Sequence};
use rivulet_stream::FilterExt;
use rivulet_test_utils::person::Person;
use rivulet_test_utils::test_data::{person_alice, person_bob, person_charlie};
use rivulet_test_utils::{record, values_of, Recorder};

#[test]
fn test_filter_keeps_matching_values_in_order() -> anyhow::Result<()> {
    // Arrange
    let evens = Sequence::new(1..=10).filter(|n| n % 2 == 0);

    // Act
    let recorder = record(&evens);

    // Assert
    assert_eq!(recorder.values(), vec![2, 4, 6, 8, 10]);
    assert_eq!(recorder.completion(), Some(Completion::Finished));

    Ok(())
}

#[test]
fn test_filter_rejecting_everything_forwards_completion_only() -> anyhow::Result<()> {
    // Arrange
    let none = Sequence::new(1..=5).filter(|_| false);

    // Act
    let recorder = record(&none);

    // Assert
    assert_eq!(recorder.value_count(), 0);
    assert!(recorder.is_finished());

    Ok(())
}

#[test]
fn test_filter_on_subject_people() -> anyhow::Result<()> {
    // Arrange
    let people = PassthroughSubject::<Person>::new();
    let recorder = Recorder::new();
    let _subscription = people
        .clone()
        .filter(|person| person.age > 28)
        .subscribe(recorder.clone());

    // Act
    people.send(person_alice());
    people.send(person_bob());
    people.send(person_charlie());

    // Assert
    assert_eq!(recorder.values(), vec![person_bob(), person_charlie()]);
    assert!(!recorder.is_completed());

    Ok(())
}

#[test]
fn test_filter_each_subscription_is_independent() -> anyhow::Result<()> {
    // Arrange
    let odds = Sequence::new(vec![1, 2, 3]).filter(|n| n % 2 == 1);

    // Act
    let first = values_of(&odds);
    let second = values_of(&odds);

    // Assert
    assert_eq!(first, vec![1, 3]);
    assert_eq!(second, first);

    Ok(())
}
