// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Completion, PassthroughSubject, Publisher, Sequence};
use rivulet_stream::{
    CompactMapExt, DropFirstExt, DropUntilOutputFromExt, FilterExt, FirstWhereExt,
    PrefixExt, PrefixUntilOutputFromExt, RemoveDuplicatesExt,
};
use rivulet_test_utils::test_data::sentence_words;
use rivulet_test_utils::{record, values_of, Event, Probe, Recorder};

#[test]
fn test_drop_first_then_prefix_then_filter() -> anyhow::Result<()> {
    // Arrange
    let source = Probe::new(Sequence::new(1..=100));
    let stats = source.stats();
    let evens = source.drop_first(50).prefix(20).filter(|n| n % 2 == 0);

    // Act
    let recorder = record(&evens);

    // Assert
    assert_eq!(recorder.values(), (52..=70).step_by(2).collect::<Vec<_>>());
    assert!(recorder.is_finished());
    assert_eq!(stats.values(), 70);
    assert_eq!(stats.cancellations(), 1);

    Ok(())
}

#[test]
fn test_prefix_then_drop_first_of_same_count_is_empty() -> anyhow::Result<()> {
    // Arrange
    let length = 10;

    for n in 0..=length + 1 {
        let nothing = Sequence::new(1..=length).prefix(n).drop_first(n);

        // Act
        let recorder = record(&nothing);

        // Assert
        assert_eq!(
            recorder.events(),
            vec![Event::Completed(Completion::Finished)],
            "prefix({n}).drop_first({n}) over {length} values"
        );
    }

    Ok(())
}

#[test]
fn test_words_pipeline() -> anyhow::Result<()> {
    // Arrange
    let words = Sequence::new(sentence_words())
        .remove_duplicates()
        .filter(|word| word.chars().all(char::is_alphabetic))
        .compact_map(|word| (word.len() > 2).then(|| word.to_uppercase()));

    // Act
    let values = values_of(&words);

    // Assert
    assert_eq!(values, vec!["HEY", "WANT", "LISTEN", "MISTER"]);

    Ok(())
}

#[test]
fn test_gate_window_between_two_controls() -> anyhow::Result<()> {
    // Arrange
    let taps = PassthroughSubject::<i32>::new();
    let start = PassthroughSubject::<()>::new();
    let stop = PassthroughSubject::<()>::new();
    let recorder = Recorder::new();
    let _subscription = taps
        .clone()
        .drop_until_output_from(start.clone())
        .prefix_until_output_from(stop.clone())
        .subscribe(recorder.clone());

    // Act
    taps.send(1);
    start.send(());
    taps.send(2);
    taps.send(3);
    stop.send(());
    taps.send(4);

    // Assert
    assert_eq!(
        recorder.events(),
        vec![
            Event::Value(2),
            Event::Value(3),
            Event::Completed(Completion::Finished),
        ]
    );
    assert_eq!(taps.subscriber_count(), 0);
    assert_eq!(start.subscriber_count(), 0);
    assert_eq!(stop.subscriber_count(), 0);

    Ok(())
}

#[test]
fn test_publisher_can_be_subscribed_repeatedly_with_fresh_state() -> anyhow::Result<()> {
    // Arrange
    let first_big = Sequence::new(vec![3, 8, 12, 1]).first_where(|n| *n > 5);

    // Act
    let first = values_of(&first_big);
    let second = values_of(&first_big);

    // Assert
    assert_eq!(first, vec![8]);
    assert_eq!(second, vec![8]);

    Ok(())
}
