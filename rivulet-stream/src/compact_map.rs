// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Compact-map operator that transforms values and drops the ones that map to `None`.

use core::marker::PhantomData;
use rivulet_core::{Completion, Downstream, Publisher, Subscriber};
use std::sync::Arc;

/// Publisher returned by [`CompactMapExt::compact_map`].
pub struct CompactMap<P, F, U> {
    upstream: P,
    transform: Arc<F>,
    _output: PhantomData<fn() -> U>,
}

struct CompactMapSubscriber<U, E, F> {
    downstream: Downstream<U, E>,
    transform: Arc<F>,
}

impl<T, U, E, F> Subscriber<T, E> for CompactMapSubscriber<U, E, F>
where
    F: Fn(T) -> Option<U>,
{
    fn on_value(&mut self, value: T) {
        if let Some(mapped) = (self.transform)(value) {
            self.downstream.send(mapped);
        }
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        self.downstream.complete(completion);
    }
}

impl<P, F, U> Publisher for CompactMap<P, F, U>
where
    P: Publisher,
    P::Failure: Send + 'static,
    U: Send + 'static,
    F: Fn(P::Output) -> Option<U> + Send + Sync + 'static,
{
    type Output = U;
    type Failure = P::Failure;

    fn attach(&self, downstream: Downstream<U, P::Failure>) {
        let upstream = downstream.subscription().child();
        self.upstream.attach(Downstream::new(
            CompactMapSubscriber {
                downstream,
                transform: Arc::clone(&self.transform),
            },
            upstream,
        ));
    }
}

/// Extension trait providing the `compact_map` operator for publishers.
pub trait CompactMapExt: Publisher + Sized {
    /// Forwards `transform(value)` when it is `Some`, drops the value otherwise.
    ///
    /// The output type may differ from the input type. Completion is always forwarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::Sequence;
    /// use rivulet_stream::CompactMapExt;
    /// use rivulet_test_utils::values_of;
    ///
    /// let floats = Sequence::new(vec!["a", "1.24", "def", "45"])
    ///     .compact_map(|s: &str| s.parse::<f32>().ok());
    ///
    /// assert_eq!(values_of(&floats), vec![1.24, 45.0]);
    /// ```
    fn compact_map<U, F>(self, transform: F) -> CompactMap<Self, F, U>
    where
        F: Fn(Self::Output) -> Option<U> + Send + Sync + 'static;
}

impl<P: Publisher> CompactMapExt for P {
    fn compact_map<U, F>(self, transform: F) -> CompactMap<Self, F, U>
    where
        F: Fn(Self::Output) -> Option<U> + Send + Sync + 'static,
    {
        CompactMap {
            upstream: self,
            transform: Arc::new(transform),
            _output: PhantomData,
        }
    }
}
