// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Completion, Downstream, Publisher, Subscriber};
use std::sync::Arc;

/// Publisher returned by [`DropWhileExt::drop_while`].
pub struct DropWhile<P, F> {
    upstream: P,
    predicate: Arc<F>,
}

struct DropWhileSubscriber<T, E, F> {
    downstream: Downstream<T, E>,
    predicate: Arc<F>,
    dropping: bool,
}

impl<T, E, F> Subscriber<T, E> for DropWhileSubscriber<T, E, F>
where
    F: Fn(&T) -> bool,
{
    fn on_value(&mut self, value: T) {
        if self.dropping {
            if (self.predicate)(&value) {
                return;
            }
            // Permanent: the predicate is never consulted again.
            self.dropping = false;
        }
        self.downstream.send(value);
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        self.downstream.complete(completion);
    }
}

impl<P, F> Publisher for DropWhile<P, F>
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
            DropWhileSubscriber {
                downstream,
                predicate: Arc::clone(&self.predicate),
                dropping: true,
            },
            upstream,
        ));
    }
}

/// Extension trait providing the `drop_while` operator for publishers.
pub trait DropWhileExt: Publisher + Sized {
    /// Drops values while `predicate` holds, then forwards the first failing value and
    /// everything after it.
    ///
    /// The predicate runs exactly once per value during the dropping phase and never after it,
    /// so side effects inside it are confined to that phase.
    fn drop_while<F>(self, predicate: F) -> DropWhile<Self, F>
    where
        F: Fn(&Self::Output) -> bool + Send + Sync + 'static;
}

impl<P: Publisher> DropWhileExt for P {
    fn drop_while<F>(self, predicate: F) -> DropWhile<Self, F>
    where
        F: Fn(&Self::Output) -> bool + Send + Sync + 'static,
    {
        DropWhile {
            upstream: self,
            predicate: Arc::new(predicate),
        }
    }
}
