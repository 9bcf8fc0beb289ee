// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators that change the failure type of a publisher.
//!
//! The two-source operators require both sources to share a failure type; these adapters line
//! them up.

use core::convert::Infallible;
use core::marker::PhantomData;
use rivulet_core::{Completion, Downstream, Publisher, Subscriber};
use std::sync::Arc;

/// Publisher returned by [`MapErrorExt::map_error`].
pub struct MapError<P, F, E> {
    upstream: P,
    transform: Arc<F>,
    _failure: PhantomData<fn() -> E>,
}

struct MapErrorSubscriber<T, E, F> {
    downstream: Downstream<T, E>,
    transform: Arc<F>,
}

impl<T, E, G, F> Subscriber<T, G> for MapErrorSubscriber<T, E, F>
where
    F: Fn(G) -> E,
{
    fn on_value(&mut self, value: T) {
        self.downstream.send(value);
    }

    fn on_completion(&mut self, completion: Completion<G>) {
        let transform = &self.transform;
        self.downstream
            .complete(completion.map_err(|error| transform(error)));
    }
}

impl<P, F, E> Publisher for MapError<P, F, E>
where
    P: Publisher,
    P::Output: Send + 'static,
    E: Send + 'static,
    F: Fn(P::Failure) -> E + Send + Sync + 'static,
{
    type Output = P::Output;
    type Failure = E;

    fn attach(&self, downstream: Downstream<P::Output, E>) {
        let upstream = downstream.subscription().child();
        self.upstream.attach(Downstream::new(
            MapErrorSubscriber {
                downstream,
                transform: Arc::clone(&self.transform),
            },
            upstream,
        ));
    }
}

/// Extension trait providing the `map_error` operator for publishers.
pub trait MapErrorExt: Publisher + Sized {
    /// Converts the payload of a `Failed` completion with `transform`.
    fn map_error<E, F>(self, transform: F) -> MapError<Self, F, E>
    where
        F: Fn(Self::Failure) -> E + Send + Sync + 'static;
}

impl<P: Publisher> MapErrorExt for P {
    fn map_error<E, F>(self, transform: F) -> MapError<Self, F, E>
    where
        F: Fn(Self::Failure) -> E + Send + Sync + 'static,
    {
        MapError {
            upstream: self,
            transform: Arc::new(transform),
            _failure: PhantomData,
        }
    }
}

/// Conversion used by [`SetFailureTypeExt::set_failure_type`].
pub type Unreachable<E> = fn(Infallible) -> E;

fn unreachable<E>(never: Infallible) -> E {
    match never {}
}

/// Extension trait widening the failure type of publishers that cannot fail.
pub trait SetFailureTypeExt: Publisher<Failure = Infallible> + Sized {
    /// Re-types an infallible publisher so it can be combined with publishers failing with `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::{PassthroughSubject, RivuletError, Sequence};
    /// use rivulet_stream::{PrefixUntilOutputFromExt, SetFailureTypeExt};
    ///
    /// let stop = PassthroughSubject::<(), RivuletError>::new();
    /// let _numbers = Sequence::new(1..=5)
    ///     .set_failure_type::<RivuletError>()
    ///     .prefix_until_output_from(stop);
    /// ```
    fn set_failure_type<E>(self) -> MapError<Self, Unreachable<E>, E>;
}

impl<P: Publisher<Failure = Infallible>> SetFailureTypeExt for P {
    fn set_failure_type<E>(self) -> MapError<Self, Unreachable<E>, E> {
        let transform: Unreachable<E> = unreachable;
        MapError {
            upstream: self,
            transform: Arc::new(transform),
            _failure: PhantomData,
        }
    }
}
