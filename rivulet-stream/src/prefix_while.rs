// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Completion, Downstream, Publisher, Subscriber, Subscription};
use std::sync::Arc;

/// Publisher returned by [`PrefixWhileExt::prefix_while`].
pub struct PrefixWhile<P, F> {
    upstream: P,
    predicate: Arc<F>,
}

struct PrefixWhileSubscriber<T, E, F> {
    downstream: Downstream<T, E>,
    upstream: Subscription,
    predicate: Arc<F>,
}

impl<T, E, F> Subscriber<T, E> for PrefixWhileSubscriber<T, E, F>
where
    F: Fn(&T) -> bool,
{
    fn on_value(&mut self, value: T) {
        if self.downstream.is_closed() {
            return;
        }

        if (self.predicate)(&value) {
            self.downstream.send(value);
            return;
        }

        debug!("prefix_while predicate failed, cancelling upstream");
        self.upstream.cancel();
        self.downstream.complete(Completion::Finished);
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        self.downstream.complete(completion);
    }
}

impl<P, F> Publisher for PrefixWhile<P, F>
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
            PrefixWhileSubscriber {
                downstream,
                upstream: upstream.clone(),
                predicate: Arc::clone(&self.predicate),
            },
            upstream,
        ));
    }
}

/// Extension trait providing the `prefix_while` operator for publishers.
pub trait PrefixWhileExt: Publisher + Sized {
    /// Forwards values while `predicate` holds.
    ///
    /// The first value failing the predicate is not forwarded: the operator finishes and
    /// cancels the upstream instead.
    fn prefix_while<F>(self, predicate: F) -> PrefixWhile<Self, F>
    where
        F: Fn(&Self::Output) -> bool + Send + Sync + 'static;
}

impl<P: Publisher> PrefixWhileExt for P {
    fn prefix_while<F>(self, predicate: F) -> PrefixWhile<Self, F>
    where
        F: Fn(&Self::Output) -> bool + Send + Sync + 'static,
    {
        PrefixWhile {
            upstream: self,
            predicate: Arc::new(predicate),
        }
    }
}
