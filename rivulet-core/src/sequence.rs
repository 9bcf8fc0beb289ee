// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Finite, eagerly driven publishers.
//!
//! These publishers deliver everything synchronously inside [`Publisher::attach`]. Each
//! subscription replays the sequence from the start.

use crate::{Completion, Downstream, Publisher};
use core::convert::Infallible;
use core::marker::PhantomData;

/// Publishes a fixed, ordered sequence of values, then finishes.
///
/// Any cloneable `IntoIterator` works, including ranges:
///
/// ```
/// use rivulet_core::Sequence;
///
/// let numbers = Sequence::new(1..=10);
/// let words = Sequence::new(vec!["hey", "there"]);
/// # let _ = (numbers, words);
/// ```
#[derive(Debug, Clone)]
pub struct Sequence<I> {
    values: I,
}

impl<I> Sequence<I>
where
    I: IntoIterator + Clone,
{
    pub fn new(values: I) -> Self {
        Self { values }
    }
}

/// Shorthand for [`Sequence::new`].
pub fn sequence<I>(values: I) -> Sequence<I>
where
    I: IntoIterator + Clone,
{
    Sequence::new(values)
}

impl<I> Publisher for Sequence<I>
where
    I: IntoIterator + Clone,
{
    type Output = I::Item;
    type Failure = Infallible;

    fn attach(&self, mut downstream: Downstream<I::Item, Infallible>) {
        for value in self.values.clone() {
            // Honors cancellation issued from inside the previous value handler.
            if downstream.is_closed() {
                return;
            }
            downstream.send(value);
        }
        downstream.complete(Completion::Finished);
    }
}

/// Finishes immediately without delivering any value.
#[derive(Debug)]
pub struct Empty<T, E = Infallible> {
    _marker: PhantomData<fn() -> (T, E)>,
}

impl<T, E> Empty<T, E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T, E> Default for Empty<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Publisher for Empty<T, E> {
    type Output = T;
    type Failure = E;

    fn attach(&self, mut downstream: Downstream<T, E>) {
        downstream.complete(Completion::Finished);
    }
}

/// Fails immediately with a clone of the stored error.
#[derive(Debug, Clone)]
pub struct Fail<T, E> {
    error: E,
    _marker: PhantomData<fn() -> T>,
}

impl<T, E> Fail<T, E> {
    pub const fn new(error: E) -> Self {
        Self {
            error,
            _marker: PhantomData,
        }
    }
}

impl<T, E: Clone> Publisher for Fail<T, E> {
    type Output = T;
    type Failure = E;

    fn attach(&self, mut downstream: Downstream<T, E>) {
        downstream.complete(Completion::Failed(self.error.clone()));
    }
}
