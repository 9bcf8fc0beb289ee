// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operator that forwards only values matching a predicate.

use rivulet_core::{Completion, Downstream, Publisher, Subscriber};
use std::sync::Arc;

/// Publisher returned by [`FilterExt::filter`].
pub struct Filter<P, F> {
    upstream: P,
    predicate: Arc<F>,
}

struct FilterSubscriber<T, E, F> {
    downstream: Downstream<T, E>,
    predicate: Arc<F>,
}

impl<T, E, F> Subscriber<T, E> for FilterSubscriber<T, E, F>
where
    F: Fn(&T) -> bool,
{
    fn on_value(&mut self, value: T) {
        if (self.predicate)(&value) {
            self.downstream.send(value);
        }
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        self.downstream.complete(completion);
    }
}

impl<P, F> Publisher for Filter<P, F>
where
    P: Publisher,
    P::Output: Send + 'static,
    P::Failure: Send + 'static,
    F: Fn(&P::Output) -> bool + Send + Sync + 'static,
{
    type Output = P::Output;
    type Failure = P::Failure;

    fn attach(&self, downstream: Downstream<P::Output, P::Failure>) {
        let upstream = downstream.subscription().child();
        self.upstream.attach(Downstream::new(
            FilterSubscriber {
                downstream,
                predicate: Arc::clone(&self.predicate),
            },
            upstream,
        ));
    }
}

/// Extension trait providing the `filter` operator for publishers.
pub trait FilterExt: Publisher + Sized {
    /// Forwards a value only if `predicate` returns `true` for it.
    ///
    /// Order is preserved; completion (finished or failed) is always forwarded.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Called once per value with a reference to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::Sequence;
    /// use rivulet_stream::FilterExt;
    /// use rivulet_test_utils::values_of;
    ///
    /// let multiples_of_three = Sequence::new(1..=10).filter(|n| n % 3 == 0);
    ///
    /// assert_eq!(values_of(&multiples_of_three), vec![3, 6, 9]);
    /// ```
    ///
    /// # See Also
    ///
    /// - [`CompactMapExt::compact_map`](crate::CompactMapExt::compact_map) - Filter and transform in one step
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool + Send + Sync + 'static;
}

impl<P: Publisher> FilterExt for P {
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: Fn(&Self::Output) -> bool + Send + Sync + 'static,
    {
        Filter {
            upstream: self,
            predicate: Arc::new(predicate),
        }
    }
}
