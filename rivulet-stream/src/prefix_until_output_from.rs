// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prefix-until-output-from operator: forwarding stopped by a second publisher.

use core::marker::PhantomData;
use rivulet_core::{Completion, Downstream, Publisher, SharedDownstream, Subscriber, Subscription};

/// Publisher returned by [`PrefixUntilOutputFromExt::prefix_until_output_from`].
pub struct PrefixUntilOutputFrom<P, C> {
    upstream: P,
    control: C,
}

struct UpstreamSubscriber<T, E> {
    downstream: SharedDownstream<T, E>,
    control: Subscription,
}

impl<T, E> Subscriber<T, E> for UpstreamSubscriber<T, E> {
    fn on_value(&mut self, value: T) {
        self.downstream.send(value);
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        self.control.cancel();
        self.downstream.complete(completion);
    }
}

struct ControlSubscriber<T, E, C> {
    downstream: SharedDownstream<T, E>,
    upstream: Subscription,
    control: Subscription,
    _control_output: PhantomData<fn(C)>,
}

impl<T, E, C> ControlSubscriber<T, E, C> {
    fn close(&mut self, completion: Completion<E>) {
        self.upstream.cancel();
        self.control.cancel();
        // Queued behind the current delivery if the control fired from a downstream handler.
        self.downstream.complete(completion);
    }
}

impl<T, E, C> Subscriber<C, E> for ControlSubscriber<T, E, C> {
    fn on_value(&mut self, _value: C) {
        debug!("prefix_until_output_from control fired, finishing");
        self.close(Completion::Finished);
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        match completion {
            // Keeps forwarding until the upstream completes.
            Completion::Finished => {}
            Completion::Failed(error) => self.close(Completion::Failed(error)),
        }
    }
}

impl<P, C> Publisher for PrefixUntilOutputFrom<P, C>
where
    P: Publisher,
    P::Output: Send + 'static,
    P::Failure: Send + 'static,
    C: Publisher<Failure = P::Failure>,
    C::Output: 'static,
{
    type Output = P::Output;
    type Failure = P::Failure;

    fn attach(&self, downstream: Downstream<P::Output, P::Failure>) {
        let upstream = downstream.subscription().child();
        let control = downstream.subscription().child();
        let downstream = SharedDownstream::new(downstream);

        self.control.attach(Downstream::new(
            ControlSubscriber {
                downstream: downstream.clone(),
                upstream: upstream.clone(),
                control: control.clone(),
                _control_output: PhantomData,
            },
            control.clone(),
        ));

        // An eager control publisher may already have closed the gate.
        if downstream.is_closed() {
            return;
        }

        self.upstream.attach(Downstream::new(
            UpstreamSubscriber {
                downstream,
                control,
            },
            upstream,
        ));
    }
}

/// Extension trait providing the `prefix_until_output_from` operator for publishers.
pub trait PrefixUntilOutputFromExt: Publisher + Sized {
    /// Forwards values until `control` emits, then finishes and cancels both sources.
    ///
    /// If the upstream completes first, its completion is forwarded. If `control` fails, the
    /// failure is forwarded; if it finishes without emitting, forwarding simply continues.
    fn prefix_until_output_from<C>(self, control: C) -> PrefixUntilOutputFrom<Self, C>
    where
        C: Publisher<Failure = Self::Failure>;
}

impl<P: Publisher> PrefixUntilOutputFromExt for P {
    fn prefix_until_output_from<C>(self, control: C) -> PrefixUntilOutputFrom<Self, C>
    where
        C: Publisher<Failure = Self::Failure>,
    {
        PrefixUntilOutputFrom {
            upstream: self,
            control,
        }
    }
}
