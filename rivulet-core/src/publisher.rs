// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Downstream, Subscriber, Subscription};
use std::sync::Arc;

/// A source that can be subscribed to.
///
/// A publisher is pure configuration: nothing happens until [`subscribe`](Self::subscribe) is
/// called, and every call builds a fresh, independent delivery path with fresh operator state.
///
/// Implementations deliver values in emission order, then at most one completion, through the
/// [`Downstream`] they were attached with, and stop as soon as it reports
/// [`is_closed`](Downstream::is_closed).
pub trait Publisher {
    /// Type of the values delivered.
    type Output;
    /// Payload of a `Failed` completion.
    type Failure;

    /// Starts delivering to `downstream`.
    ///
    /// Finite eager sources may deliver everything before this returns.
    fn attach(&self, downstream: Downstream<Self::Output, Self::Failure>);

    /// Subscribes `subscriber` and returns the subscription that cancels it.
    fn subscribe<S>(&self, subscriber: S) -> Subscription
    where
        Self: Sized,
        S: Subscriber<Self::Output, Self::Failure> + Send + 'static,
    {
        let subscription = Subscription::new();
        self.attach(Downstream::new(subscriber, subscription.clone()));
        subscription
    }
}

/// Type-erased publisher.
pub type BoxPublisher<T, E> = Box<dyn Publisher<Output = T, Failure = E> + Send + Sync>;

impl<P> Publisher for Box<P>
where
    P: Publisher + ?Sized,
{
    type Output = P::Output;
    type Failure = P::Failure;

    fn attach(&self, downstream: Downstream<Self::Output, Self::Failure>) {
        (**self).attach(downstream);
    }
}

impl<P> Publisher for Arc<P>
where
    P: Publisher + ?Sized,
{
    type Output = P::Output;
    type Failure = P::Failure;

    fn attach(&self, downstream: Downstream<Self::Output, Self::Failure>) {
        (**self).attach(downstream);
    }
}

impl<P> Publisher for &P
where
    P: Publisher + ?Sized,
{
    type Output = P::Output;
    type Failure = P::Failure;

    fn attach(&self, downstream: Downstream<Self::Output, Self::Failure>) {
        (**self).attach(downstream);
    }
}
