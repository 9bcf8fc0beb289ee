// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Tap operator for side-effect observation without modifying the sequence.

use rivulet_core::{Completion, Downstream, Publisher, Subscriber};
use std::sync::Arc;

/// Publisher returned by [`TapExt::tap`].
pub struct Tap<P, F> {
    upstream: P,
    f: Arc<F>,
}

struct TapSubscriber<T, E, F> {
    downstream: Downstream<T, E>,
    f: Arc<F>,
}

impl<T, E, F> Subscriber<T, E> for TapSubscriber<T, E, F>
where
    F: Fn(&T),
{
    fn on_value(&mut self, value: T) {
        (self.f)(&value);
        self.downstream.send(value);
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        self.downstream.complete(completion);
    }
}

impl<P, F> Publisher for Tap<P, F>
where
    P: Publisher,
    P::Output: Send + 'static,
    P::Failure: Send + 'static,
    F: Fn(&P::Output) + Send + Sync + 'static,
{
    type Output = P::Output;
    type Failure = P::Failure;

    fn attach(&self, downstream: Downstream<P::Output, P::Failure>) {
        let upstream = downstream.subscription().child();
        self.upstream.attach(Downstream::new(
            TapSubscriber {
                downstream,
                f: Arc::clone(&self.f),
            },
            upstream,
        ));
    }
}

/// Extension trait providing the `tap` operator for publishers.
pub trait TapExt: Publisher + Sized {
    /// Invokes `f` with a reference to each value before forwarding it unchanged.
    ///
    /// Useful for debugging, metrics and for driving other publishers at a precise point of
    /// the delivery.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::Sequence;
    /// use rivulet_stream::TapExt;
    /// use rivulet_test_utils::values_of;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let seen = Arc::new(AtomicUsize::new(0));
    /// let counter = seen.clone();
    /// let numbers = Sequence::new(1..=3).tap(move |_| {
    ///     counter.fetch_add(1, Ordering::SeqCst);
    /// });
    ///
    /// assert_eq!(values_of(&numbers), vec![1, 2, 3]);
    /// assert_eq!(seen.load(Ordering::SeqCst), 3);
    /// ```
    fn tap<F>(self, f: F) -> Tap<Self, F>
    where
        F: Fn(&Self::Output) + Send + Sync + 'static;
}

impl<P: Publisher> TapExt for P {
    fn tap<F>(self, f: F) -> Tap<Self, F>
    where
        F: Fn(&Self::Output) + Send + Sync + 'static,
    {
        Tap {
            upstream: self,
            f: Arc::new(f),
        }
    }
}
