// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drop-until-output-from operator: a gate opened by a second publisher.
//!
//! Upstream values are dropped until the control publisher emits its first value; from then on
//! every upstream value is forwarded. The gate is sampled when an upstream value reaches this
//! operator, so a control emission that happens earlier on the same call stack (for example from
//! a `tap` placed above the gate) already lets that value through, while a control emission from
//! a later call only affects the values after it.

use core::marker::PhantomData;
use rivulet_core::{Completion, Downstream, Publisher, SharedDownstream, Subscriber, Subscription};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Publisher returned by [`DropUntilOutputFromExt::drop_until_output_from`].
pub struct DropUntilOutputFrom<P, C> {
    upstream: P,
    control: C,
}

struct UpstreamSubscriber<T, E> {
    downstream: SharedDownstream<T, E>,
    control: Subscription,
    open: Arc<AtomicBool>,
}

impl<T, E> Subscriber<T, E> for UpstreamSubscriber<T, E> {
    fn on_value(&mut self, value: T) {
        if self.open.load(Ordering::Acquire) {
            self.downstream.send(value);
        }
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
    open: Arc<AtomicBool>,
    _control_output: PhantomData<fn(C)>,
}

impl<T, E, C> Subscriber<C, E> for ControlSubscriber<T, E, C> {
    fn on_value(&mut self, _value: C) {
        if !self.open.swap(true, Ordering::AcqRel) {
            debug!("drop_until_output_from gate opened");
            // Further control emissions are irrelevant.
            self.control.cancel();
        }
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        match completion {
            // The gate stays as it is; upstream completion is still forwarded.
            Completion::Finished => {}
            Completion::Failed(error) => {
                if self.open.load(Ordering::Acquire) {
                    return;
                }
                self.upstream.cancel();
                self.downstream.complete(Completion::Failed(error));
            }
        }
    }
}

impl<P, C> Publisher for DropUntilOutputFrom<P, C>
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
        let open = Arc::new(AtomicBool::new(false));

        // Control first: an eager control publisher opens the gate before any upstream value.
        self.control.attach(Downstream::new(
            ControlSubscriber {
                downstream: downstream.clone(),
                upstream: upstream.clone(),
                control: control.clone(),
                open: Arc::clone(&open),
                _control_output: PhantomData,
            },
            control.clone(),
        ));

        if downstream.is_closed() {
            return;
        }

        self.upstream.attach(Downstream::new(
            UpstreamSubscriber {
                downstream,
                control,
                open,
            },
            upstream,
        ));
    }
}

/// Extension trait providing the `drop_until_output_from` operator for publishers.
pub trait DropUntilOutputFromExt: Publisher + Sized {
    /// Drops values until `control` emits, then forwards everything.
    ///
    /// Only the fact that `control` emitted matters, not its value. Upstream completion is
    /// always forwarded. If `control` fails before emitting, the failure is forwarded and the
    /// upstream cancelled; if it finishes without emitting, the gate never opens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::PassthroughSubject;
    /// use rivulet_stream::DropUntilOutputFromExt;
    /// use rivulet_core::Publisher;
    /// use rivulet_test_utils::Recorder;
    ///
    /// let taps = PassthroughSubject::<i32>::new();
    /// let ready = PassthroughSubject::<()>::new();
    /// let recorder = Recorder::new();
    ///
    /// let _subscription = taps
    ///     .clone()
    ///     .drop_until_output_from(ready.clone())
    ///     .subscribe(recorder.clone());
    ///
    /// taps.send(1);
    /// taps.send(2);
    /// ready.send(());
    /// taps.send(3);
    ///
    /// assert_eq!(recorder.values(), vec![3]);
    /// ```
    fn drop_until_output_from<C>(self, control: C) -> DropUntilOutputFrom<Self, C>
    where
        C: Publisher<Failure = Self::Failure>;
}

impl<P: Publisher> DropUntilOutputFromExt for P {
    fn drop_until_output_from<C>(self, control: C) -> DropUntilOutputFrom<Self, C>
    where
        C: Publisher<Failure = Self::Failure>,
    {
        DropUntilOutputFrom {
            upstream: self,
            control,
        }
    }
}
