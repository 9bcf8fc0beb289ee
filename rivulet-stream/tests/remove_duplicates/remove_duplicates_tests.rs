// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{PassthroughSubject, Publisher, Sequence};
use rivulet_stream::RemoveDuplicatesExt;
use rivulet_test_utils::person::Person;
use rivulet_test_utils::test_data::{person_alice, person_bob, person_bob_older, sentence_words};
use rivulet_test_utils::{record, values_of, Recorder};

#[test]
fn test_remove_duplicates_collapses_consecutive_words() -> anyhow::Result<()> {
    // Arrange
    let words = Sequence::new(vec!["hey", "hey", "there", "mister", "mister"]).remove_duplicates();

    // Act
    let recorder = record(&words);

    // Assert
    assert_eq!(recorder.values(), vec!["hey", "there", "mister"]);
    assert!(recorder.is_finished());

    Ok(())
}

#[test]
fn test_remove_duplicates_keeps_non_consecutive_repeats() -> anyhow::Result<()> {
    // Arrange
    let words = Sequence::new(sentence_words()).remove_duplicates();

    // Act
    let values = values_of(&words);

    // Assert
    assert_eq!(
        values,
        vec!["hey", "there!", "I", "want", "to", "listen", "to", "mister", "?"]
    );

    Ok(())
}

#[test]
fn test_remove_duplicates_first_value_always_forwarded() -> anyhow::Result<()> {
    // Arrange
    let numbers = PassthroughSubject::<i32>::new();
    let recorder = Recorder::new();
    let _subscription = numbers
        .clone()
        .remove_duplicates()
        .subscribe(recorder.clone());

    // Act
    numbers.send(0);
    numbers.send(0);
    numbers.send(1);
    numbers.send(0);

    // Assert
    assert_eq!(recorder.values(), vec![0, 1, 0]);

    Ok(())
}

#[test]
fn test_remove_duplicates_by_custom_equality() -> anyhow::Result<()> {
    // Arrange
    let people = PassthroughSubject::<Person>::new();
    let recorder = Recorder::new();
    let _subscription = people
        .clone()
        .remove_duplicates_by(|previous, current| previous.name == current.name)
        .subscribe(recorder.clone());

    // Act
    people.send(person_bob());
    people.send(person_bob_older());
    people.send(person_alice());

    // Assert
    assert_eq!(recorder.values(), vec![person_bob(), person_alice()]);

    Ok(())
}
