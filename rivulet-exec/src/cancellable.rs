// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::Subscription;

/// Owning handle to a subscription that cancels it when dropped.
///
/// ```rust
/// use rivulet_core::PassthroughSubject;
/// use rivulet_exec::SinkExt;
///
/// let numbers = PassthroughSubject::<i32>::new();
/// {
///     let _cancellable = numbers.sink(|_| {}, |_| {});
///     assert_eq!(numbers.subscriber_count(), 1);
/// }
/// assert_eq!(numbers.subscriber_count(), 0);
/// ```
#[derive(Debug)]
#[must_use = "dropping a Cancellable cancels its subscription"]
pub struct Cancellable {
    subscription: Subscription,
}

impl Cancellable {
    pub fn new(subscription: Subscription) -> Self {
        Self { subscription }
    }

    /// Cancels the subscription now. Further calls and the final drop have no effect.
    pub fn cancel(&self) {
        self.subscription.cancel();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.subscription.is_cancelled()
    }

    #[must_use]
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }

    /// Moves this handle into `bag`, tying the subscription's lifetime to the bag.
    pub fn store(self, bag: &mut CancelBag) {
        bag.insert(self);
    }
}

impl From<Subscription> for Cancellable {
    fn from(subscription: Subscription) -> Self {
        Self::new(subscription)
    }
}

impl Drop for Cancellable {
    fn drop(&mut self) {
        self.subscription.cancel();
    }
}

/// Caller-owned collection of [`Cancellable`]s; dropping it cancels all of them.
#[derive(Debug, Default)]
pub struct CancelBag {
    cancellables: Vec<Cancellable>,
}

impl CancelBag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, cancellable: Cancellable) {
        self.cancellables.push(cancellable);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cancellables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cancellables.is_empty()
    }

    /// Cancels and removes every stored handle. The bag stays usable.
    pub fn cancel_all(&mut self) {
        let cancellables = std::mem::take(&mut self.cancellables);
        debug!("cancelling {} stored subscription(s)", cancellables.len());
        drop(cancellables);
    }
}

impl Extend<Cancellable> for CancelBag {
    fn extend<I: IntoIterator<Item = Cancellable>>(&mut self, iter: I) {
        self.cancellables.extend(iter);
    }
}
