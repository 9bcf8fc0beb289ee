// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Completion, Downstream, Publisher, Subscriber};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counters shared by a [`Probe`] and the test observing it.
#[derive(Debug, Default)]
pub struct ProbeStats {
    subscriptions: AtomicUsize,
    values: AtomicUsize,
    completions: AtomicUsize,
    cancellations: AtomicUsize,
}

impl ProbeStats {
    pub fn subscriptions(&self) -> usize {
        self.subscriptions.load(Ordering::SeqCst)
    }

    /// Values the wrapped publisher delivered.
    pub fn values(&self) -> usize {
        self.values.load(Ordering::SeqCst)
    }

    pub fn completions(&self) -> usize {
        self.completions.load(Ordering::SeqCst)
    }

    /// Times the teardown of a subscription to the probe ran.
    pub fn cancellations(&self) -> usize {
        self.cancellations.load(Ordering::SeqCst)
    }
}

/// Transparent publisher wrapper that counts upstream activity.
///
/// Placed between a source and an operator, it shows what the source actually delivered and
/// whether the operator cancelled it.
pub struct Probe<P> {
    upstream: P,
    stats: Arc<ProbeStats>,
}

impl<P> Probe<P> {
    pub fn new(upstream: P) -> Self {
        Self {
            upstream,
            stats: Arc::new(ProbeStats::default()),
        }
    }

    pub fn stats(&self) -> Arc<ProbeStats> {
        Arc::clone(&self.stats)
    }
}

struct ProbeSubscriber<T, E> {
    downstream: Downstream<T, E>,
    stats: Arc<ProbeStats>,
}

impl<T, E> Subscriber<T, E> for ProbeSubscriber<T, E> {
    fn on_value(&mut self, value: T) {
        self.stats.values.fetch_add(1, Ordering::SeqCst);
        self.downstream.send(value);
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        self.stats.completions.fetch_add(1, Ordering::SeqCst);
        self.downstream.complete(completion);
    }
}

impl<P> Publisher for Probe<P>
where
    P: Publisher,
    P::Output: Send + 'static,
    P::Failure: Send + 'static,
{
    type Output = P::Output;
    type Failure = P::Failure;

    fn attach(&self, downstream: Downstream<P::Output, P::Failure>) {
        self.stats.subscriptions.fetch_add(1, Ordering::SeqCst);

        let subscription = downstream.subscription().clone();
        let stats = Arc::clone(&self.stats);
        subscription.on_cancel(move || {
            stats.cancellations.fetch_add(1, Ordering::SeqCst);
        });

        self.upstream.attach(Downstream::new(
            ProbeSubscriber {
                downstream,
                stats: Arc::clone(&self.stats),
            },
            subscription.child(),
        ));
    }
}
