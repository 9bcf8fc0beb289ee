// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Remove-duplicates operator that collapses runs of consecutive equal values.

use rivulet_core::{Completion, Downstream, Publisher, Subscriber};
use std::sync::Arc;

/// Publisher returned by [`RemoveDuplicatesExt::remove_duplicates`] and
/// [`RemoveDuplicatesExt::remove_duplicates_by`].
pub struct RemoveDuplicates<P, F> {
    upstream: P,
    equals: Arc<F>,
}

struct RemoveDuplicatesSubscriber<T, E, F> {
    downstream: Downstream<T, E>,
    equals: Arc<F>,
    last_forwarded: Option<T>,
}

impl<T, E, F> Subscriber<T, E> for RemoveDuplicatesSubscriber<T, E, F>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    fn on_value(&mut self, value: T) {
        let duplicate = self
            .last_forwarded
            .as_ref()
            .is_some_and(|last| (self.equals)(last, &value));
        if duplicate {
            return;
        }

        self.last_forwarded = Some(value.clone());
        self.downstream.send(value);
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        self.last_forwarded = None;
        self.downstream.complete(completion);
    }
}

impl<P, F> Publisher for RemoveDuplicates<P, F>
where
    P: Publisher,
    P::Output: Clone + Send + 'static,
    P::Failure: Send + 'static,
    F: Fn(&P::Output, &P::Output) -> bool + Send + Sync + 'static,
{
    type Output = P::Output;
    type Failure = P::Failure;

    fn attach(&self, downstream: Downstream<P::Output, P::Failure>) {
        let upstream = downstream.subscription().child();
        self.upstream.attach(Downstream::new(
            RemoveDuplicatesSubscriber {
                downstream,
                equals: Arc::clone(&self.equals),
                last_forwarded: None,
            },
            upstream,
        ));
    }
}

/// Equality used by [`RemoveDuplicatesExt::remove_duplicates`].
pub type DefaultEquality<T> = fn(&T, &T) -> bool;

/// Extension trait providing the `remove_duplicates` operators for publishers.
pub trait RemoveDuplicatesExt: Publisher + Sized {
    /// Drops a value if it equals the last forwarded value.
    ///
    /// Only consecutive repeats are removed; the first value is always forwarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::Sequence;
    /// use rivulet_stream::RemoveDuplicatesExt;
    /// use rivulet_test_utils::values_of;
    ///
    /// let words = Sequence::new(vec!["hey", "hey", "there", "mister", "mister", "hey"]);
    ///
    /// assert_eq!(
    ///     values_of(&words.remove_duplicates()),
    ///     vec!["hey", "there", "mister", "hey"]
    /// );
    /// ```
    fn remove_duplicates(self) -> RemoveDuplicates<Self, DefaultEquality<Self::Output>>
    where
        Self::Output: PartialEq;

    /// Like [`remove_duplicates`](Self::remove_duplicates) with a caller-supplied equality.
    ///
    /// `equals` is called with the last forwarded value first and the candidate second.
    fn remove_duplicates_by<F>(self, equals: F) -> RemoveDuplicates<Self, F>
    where
        F: Fn(&Self::Output, &Self::Output) -> bool + Send + Sync + 'static;
}

impl<P: Publisher> RemoveDuplicatesExt for P {
    fn remove_duplicates(self) -> RemoveDuplicates<Self, DefaultEquality<Self::Output>>
    where
        Self::Output: PartialEq,
    {
        let equals: DefaultEquality<Self::Output> = PartialEq::eq;
        RemoveDuplicates {
            upstream: self,
            equals: Arc::new(equals),
        }
    }

    fn remove_duplicates_by<F>(self, equals: F) -> RemoveDuplicates<Self, F>
    where
        F: Fn(&Self::Output, &Self::Output) -> bool + Send + Sync + 'static,
    {
        RemoveDuplicates {
            upstream: self,
            equals: Arc::new(equals),
        }
    }
}
