// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! First-where operator that resolves on the first matching value.

use rivulet_core::{Completion, Downstream, Publisher, Subscriber, Subscription};
use std::sync::Arc;

/// Publisher returned by [`FirstWhereExt::first_where`] and [`FirstWhereExt::first`].
pub struct FirstWhere<P, F> {
    upstream: P,
    predicate: Arc<F>,
}

struct FirstWhereSubscriber<T, E, F> {
    downstream: Downstream<T, E>,
    upstream: Subscription,
    predicate: Arc<F>,
}

impl<T, E, F> Subscriber<T, E> for FirstWhereSubscriber<T, E, F>
where
    F: Fn(&T) -> bool,
{
    fn on_value(&mut self, value: T) {
        if self.downstream.is_closed() || !(self.predicate)(&value) {
            return;
        }

        self.downstream.send(value);
        debug!("first_where matched, cancelling upstream");
        self.upstream.cancel();
        self.downstream.complete(Completion::Finished);
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        self.downstream.complete(completion);
    }
}

impl<P, F> Publisher for FirstWhere<P, F>
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
            FirstWhereSubscriber {
                downstream,
                upstream: upstream.clone(),
                predicate: Arc::clone(&self.predicate),
            },
            upstream,
        ));
    }
}

/// Predicate used by [`FirstWhereExt::first`] and [`LastWhereExt::last`](crate::LastWhereExt::last).
pub type AnyValue<T> = fn(&T) -> bool;

pub(crate) fn any_value<T>(_value: &T) -> bool {
    true
}

/// Extension trait providing the `first_where` and `first` operators for publishers.
pub trait FirstWhereExt: Publisher + Sized {
    /// Forwards the first value satisfying `predicate`, then finishes and cancels the upstream.
    ///
    /// If the upstream completes without a match, its completion is forwarded alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::Sequence;
    /// use rivulet_stream::FirstWhereExt;
    /// use rivulet_test_utils::record;
    ///
    /// let recorder = record(&Sequence::new(1..=9).first_where(|n| n % 2 == 0));
    ///
    /// assert_eq!(recorder.values(), vec![2]);
    /// assert!(recorder.is_finished());
    /// ```
    fn first_where<F>(self, predicate: F) -> FirstWhere<Self, F>
    where
        F: Fn(&Self::Output) -> bool + Send + Sync + 'static;

    /// Forwards only the first value.
    fn first(self) -> FirstWhere<Self, AnyValue<Self::Output>>;
}

impl<P: Publisher> FirstWhereExt for P {
    fn first_where<F>(self, predicate: F) -> FirstWhere<Self, F>
    where
        F: Fn(&Self::Output) -> bool + Send + Sync + 'static,
    {
        FirstWhere {
            upstream: self,
            predicate: Arc::new(predicate),
        }
    }

    fn first(self) -> FirstWhere<Self, AnyValue<Self::Output>> {
        let predicate: AnyValue<Self::Output> = any_value;
        FirstWhere {
            upstream: self,
            predicate: Arc::new(predicate),
        }
    }
}
