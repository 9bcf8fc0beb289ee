// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{Completion, Subscription};

/// Receiving end of a pipeline.
///
/// A subscriber sees zero or more values followed by at most one completion. It never has to
/// guard against values after completion or after cancellation: the publisher delivers through a
/// [`Downstream`], which enforces that discipline.
pub trait Subscriber<T, E> {
    /// Called once, before any value, with the subscription being established.
    ///
    /// Subscribers that may want to cancel from inside [`on_value`](Self::on_value) keep a clone.
    fn on_subscribe(&mut self, _subscription: &Subscription) {}

    /// Receives the next value.
    fn on_value(&mut self, value: T);

    /// Receives the terminal signal.
    fn on_completion(&mut self, completion: Completion<E>);
}

impl<T, E, S> Subscriber<T, E> for Box<S>
where
    S: Subscriber<T, E> + ?Sized,
{
    fn on_subscribe(&mut self, subscription: &Subscription) {
        (**self).on_subscribe(subscription);
    }

    fn on_value(&mut self, value: T) {
        (**self).on_value(value);
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        (**self).on_completion(completion);
    }
}

/// Type-erased subscriber.
pub type BoxSubscriber<T, E> = Box<dyn Subscriber<T, E> + Send>;

/// A subscriber bound to the subscription it is delivered through.
///
/// `Downstream` is what a publisher holds for each of its subscribers. It drops every value sent
/// after the subscription was cancelled or after a completion, and it lets exactly one completion
/// through. Once completed, the wrapped subscriber is released.
pub struct Downstream<T, E> {
    subscriber: Option<BoxSubscriber<T, E>>,
    subscription: Subscription,
}

impl<T, E> Downstream<T, E> {
    /// Binds `subscriber` to `subscription` and notifies it through
    /// [`Subscriber::on_subscribe`].
    pub fn new<S>(mut subscriber: S, subscription: Subscription) -> Self
    where
        S: Subscriber<T, E> + Send + 'static,
    {
        subscriber.on_subscribe(&subscription);
        Self {
            subscriber: Some(Box::new(subscriber)),
            subscription,
        }
    }

    /// The subscription this downstream is delivered through.
    #[must_use]
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }

    /// Returns `true` if nothing more may be delivered.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.subscriber.is_none() || self.subscription.is_cancelled()
    }

    /// Delivers `value` unless the downstream is closed.
    pub fn send(&mut self, value: T) {
        if self.subscription.is_cancelled() {
            return;
        }
        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber.on_value(value);
        }
    }

    /// Delivers the terminal signal unless the downstream is closed.
    pub fn complete(&mut self, completion: Completion<E>) {
        if self.subscription.is_cancelled() {
            return;
        }
        if let Some(mut subscriber) = self.subscriber.take() {
            subscriber.on_completion(completion);
        }
    }
}

impl<T, E> core::fmt::Debug for Downstream<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Downstream")
            .field("closed", &self.is_closed())
            .field("subscription", &self.subscription)
            .finish()
    }
}
