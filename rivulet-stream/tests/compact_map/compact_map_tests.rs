// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{PassthroughSubject, Publisher, Sequence};
use rivulet_stream::CompactMapExt;
use rivulet_test_utils::person::Person;
use rivulet_test_utils::test_data::{numeric_strings, person_alice, person_bob};
use rivulet_test_utils::{record, Recorder};

#[test]
fn test_compact_map_parses_numeric_strings() -> anyhow::Result<()> {
    // Arrange
    let floats = Sequence::new(numeric_strings()).compact_map(|s: &str| s.parse::<f32>().ok());

    // Act
    let recorder = record(&floats);

    // Assert
    assert_eq!(recorder.values(), vec![1.24, 3.0, 45.0, 0.23]);
    assert!(recorder.is_finished());

    Ok(())
}

#[test]
fn test_compact_map_all_none_forwards_completion_only() -> anyhow::Result<()> {
    // Arrange
    let nothing = Sequence::new(1..=4).compact_map(|_| None::<String>);

    // Act
    let recorder = record(&nothing);

    // Assert
    assert!(recorder.values().is_empty());
    assert!(recorder.is_finished());

    Ok(())
}

#[test]
fn test_compact_map_changes_output_type() -> anyhow::Result<()> {
    // Arrange
    let people = PassthroughSubject::<Person>::new();
    let recorder = Recorder::new();
    let _subscription = people
        .clone()
        .compact_map(|person| (person.age >= 30).then_some(person.name))
        .subscribe(recorder.clone());

    // Act
    people.send(person_alice());
    people.send(person_bob());

    // Assert
    assert_eq!(recorder.values(), vec!["Bob".to_string()]);

    Ok(())
}
