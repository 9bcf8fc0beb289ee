// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prefix operator that limits a publisher to its first n values.

use rivulet_core::{Completion, Downstream, Publisher, Subscriber, Subscription};

/// Publisher returned by [`PrefixExt::prefix`].
pub struct Prefix<P> {
    upstream: P,
    limit: usize,
}

struct PrefixSubscriber<T, E> {
    downstream: Downstream<T, E>,
    upstream: Subscription,
    remaining: usize,
}

impl<T, E> Subscriber<T, E> for PrefixSubscriber<T, E> {
    fn on_value(&mut self, value: T) {
        if self.remaining == 0 {
            return;
        }

        self.remaining -= 1;
        self.downstream.send(value);

        if self.remaining == 0 {
            debug!("prefix limit reached, cancelling upstream");
            self.upstream.cancel();
            self.downstream.complete(Completion::Finished);
        }
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        self.downstream.complete(completion);
    }
}

impl<P> Publisher for Prefix<P>
where
    P: Publisher,
    P::Output: Send + 'static,
    P::Failure: Send + 'static,
{
    type Output = P::Output;
    type Failure = P::Failure;

    fn attach(&self, mut downstream: Downstream<P::Output, P::Failure>) {
        if self.limit == 0 {
            // Nothing to forward: the upstream is never subscribed.
            downstream.complete(Completion::Finished);
            return;
        }

        let upstream = downstream.subscription().child();
        self.upstream.attach(Downstream::new(
            PrefixSubscriber {
                downstream,
                upstream: upstream.clone(),
                remaining: self.limit,
            },
            upstream,
        ));
    }
}

/// Extension trait providing the `prefix` operator for publishers.
pub trait PrefixExt: Publisher + Sized {
    /// Forwards the first `limit` values, then finishes and cancels the upstream.
    ///
    /// If the upstream completes before delivering `limit` values, its completion is forwarded
    /// instead. `prefix(0)` finishes immediately without subscribing upstream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::Sequence;
    /// use rivulet_stream::PrefixExt;
    /// use rivulet_test_utils::values_of;
    ///
    /// assert_eq!(values_of(&Sequence::new(1..).prefix(3)), vec![1, 2, 3]);
    /// ```
    ///
    /// # See Also
    ///
    /// - [`DropFirstExt::drop_first`](crate::DropFirstExt::drop_first) - Skip the first n values
    /// - [`PrefixWhileExt::prefix_while`](crate::PrefixWhileExt::prefix_while) - Limit by predicate
    fn prefix(self, limit: usize) -> Prefix<Self>;
}

impl<P: Publisher> PrefixExt for P {
    fn prefix(self, limit: usize) -> Prefix<Self> {
        Prefix {
            upstream: self,
            limit,
        }
    }
}
