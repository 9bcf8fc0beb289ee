// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::marker::PhantomData;
use rivulet_core::{Completion, Downstream, Publisher, Subscriber};
use std::sync::Arc;

/// Publisher returned by [`MapExt::map`].
pub struct Map<P, F, U> {
    upstream: P,
    transform: Arc<F>,
    _output: PhantomData<fn() -> U>,
}

struct MapSubscriber<U, E, F> {
    downstream: Downstream<U, E>,
    transform: Arc<F>,
}

impl<T, U, E, F> Subscriber<T, E> for MapSubscriber<U, E, F>
where
    F: Fn(T) -> U,
{
    fn on_value(&mut self, value: T) {
        self.downstream.send((self.transform)(value));
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        self.downstream.complete(completion);
    }
}

impl<P, F, U> Publisher for Map<P, F, U>
where
    P: Publisher,
    P::Failure: Send + 'static,
    U: Send + 'static,
    F: Fn(P::Output) -> U + Send + Sync + 'static,
{
    type Output = U;
    type Failure = P::Failure;

    fn attach(&self, downstream: Downstream<U, P::Failure>) {
        let upstream = downstream.subscription().child();
        self.upstream.attach(Downstream::new(
            MapSubscriber {
                downstream,
                transform: Arc::clone(&self.transform),
            },
            upstream,
        ));
    }
}

/// Extension trait providing the `map` operator for publishers.
pub trait MapExt: Publisher + Sized {
    /// Transforms every value with `transform`.
    fn map<U, F>(self, transform: F) -> Map<Self, F, U>
    where
        F: Fn(Self::Output) -> U + Send + Sync + 'static;
}

impl<P: Publisher> MapExt for P {
    fn map<U, F>(self, transform: F) -> Map<Self, F, U>
    where
        F: Fn(Self::Output) -> U + Send + Sync + 'static,
    {
        Map {
            upstream: self,
            transform: Arc::new(transform),
            _output: PhantomData,
        }
    }
}
