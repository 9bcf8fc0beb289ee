// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Last-where operator that buffers the latest match until the upstream finishes.

use crate::first_where::{any_value, AnyValue};
use rivulet_core::{Completion, Downstream, Publisher, Subscriber};
use std::sync::Arc;

/// Publisher returned by [`LastWhereExt::last_where`] and [`LastWhereExt::last`].
pub struct LastWhere<P, F> {
    upstream: P,
    predicate: Arc<F>,
}

struct LastWhereSubscriber<T, E, F> {
    downstream: Downstream<T, E>,
    predicate: Arc<F>,
    last_match: Option<T>,
}

impl<T, E, F> Subscriber<T, E> for LastWhereSubscriber<T, E, F>
where
    F: Fn(&T) -> bool,
{
    fn on_value(&mut self, value: T) {
        if (self.predicate)(&value) {
            self.last_match = Some(value);
        }
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        let last_match = self.last_match.take();
        if let (Completion::Finished, Some(value)) = (&completion, last_match) {
            self.downstream.send(value);
        }
        self.downstream.complete(completion);
    }
}

impl<P, F> Publisher for LastWhere<P, F>
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
            LastWhereSubscriber {
                downstream,
                predicate: Arc::clone(&self.predicate),
                last_match: None,
            },
            upstream,
        ));
    }
}

/// Extension trait providing the `last_where` and `last` operators for publishers.
pub trait LastWhereExt: Publisher + Sized {
    /// Emits the last value satisfying `predicate`, once the upstream finishes.
    ///
    /// Nothing is forwarded before the upstream completes. On `Finished` the buffered match (if
    /// any) is delivered followed by `Finished`; on `Failed` the buffered match is discarded and
    /// only the failure is delivered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::Sequence;
    /// use rivulet_stream::LastWhereExt;
    /// use rivulet_test_utils::record;
    ///
    /// let recorder = record(&Sequence::new(1..=9).last_where(|n| n % 2 == 0));
    ///
    /// assert_eq!(recorder.values(), vec![8]);
    /// assert!(recorder.is_finished());
    /// ```
    fn last_where<F>(self, predicate: F) -> LastWhere<Self, F>
    where
        F: Fn(&Self::Output) -> bool + Send + Sync + 'static;

    /// Emits only the last value, once the upstream finishes.
    fn last(self) -> LastWhere<Self, AnyValue<Self::Output>>;
}

impl<P: Publisher> LastWhereExt for P {
    fn last_where<F>(self, predicate: F) -> LastWhere<Self, F>
    where
        F: Fn(&Self::Output) -> bool + Send + Sync + 'static,
    {
        LastWhere {
            upstream: self,
            predicate: Arc::new(predicate),
        }
    }

    fn last(self) -> LastWhere<Self, AnyValue<Self::Output>> {
        let predicate: AnyValue<Self::Output> = any_value;
        LastWhere {
            upstream: self,
            predicate: Arc::new(predicate),
        }
    }
}
