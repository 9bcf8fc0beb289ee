// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::person::Person;

pub fn person_alice() -> Person {
    Person::new("Alice", 25)
}

pub fn person_bob() -> Person {
    Person::new("Bob", 30)
}

pub fn person_charlie() -> Person {
    Person::new("Charlie", 35)
}

/// Bob again, a year older.
pub fn person_bob_older() -> Person {
    Person::new("Bob", 31)
}

/// Words of "hey hey there! I want to listen to mister mister ?".
pub fn sentence_words() -> Vec<String> {
    "hey hey there! I want to listen to mister mister ?"
        .split(' ')
        .map(str::to_string)
        .collect()
}

/// Mixed strings, some of which parse as floats.
pub fn numeric_strings() -> Vec<&'static str> {
    vec!["a", "1.24", "3", "def", "45", "0.23"]
}
