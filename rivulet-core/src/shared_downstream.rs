// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A [`Downstream`] that several call sites can deliver into.
//!
//! Subjects and two-source operators reach the same subscriber from more than one place. Each
//! delivery takes a re-entrant lock; if a signal arrives while a handler of the same downstream is
//! still running on the current thread (for example a value handler that completes the subject it
//! is subscribed to), the signal is queued and delivered as soon as that handler returns. Handlers
//! therefore always run to completion before the next signal, and delivery order is call order.

use crate::{Completion, Downstream, Subscription};
use parking_lot::ReentrantMutex;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;

enum Signal<T, E> {
    Value(T),
    Completion(Completion<E>),
}

struct Slot<T, E> {
    downstream: RefCell<Downstream<T, E>>,
    pending: RefCell<VecDeque<Signal<T, E>>>,
}

/// Shared, re-entrancy safe handle to one downstream.
pub struct SharedDownstream<T, E> {
    slot: Arc<ReentrantMutex<Slot<T, E>>>,
    subscription: Subscription,
}

impl<T, E> SharedDownstream<T, E> {
    #[must_use]
    pub fn new(downstream: Downstream<T, E>) -> Self {
        let subscription = downstream.subscription().clone();
        Self {
            slot: Arc::new(ReentrantMutex::new(Slot {
                downstream: RefCell::new(downstream),
                pending: RefCell::new(VecDeque::new()),
            })),
            subscription,
        }
    }

    /// The subscription of the wrapped downstream.
    #[must_use]
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }

    /// Returns `true` if nothing more may be delivered.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let slot = self.slot.lock();
        let closed = match slot.downstream.try_borrow() {
            Ok(downstream) => downstream.is_closed(),
            Err(_) => self.subscription.is_cancelled(),
        };
        closed
    }

    /// Delivers `value`, or queues it behind a delivery in progress on this thread.
    pub fn send(&self, value: T) {
        self.deliver(Signal::Value(value));
    }

    /// Delivers `completion`, or queues it behind a delivery in progress on this thread.
    pub fn complete(&self, completion: Completion<E>) {
        self.deliver(Signal::Completion(completion));
    }

    fn deliver(&self, signal: Signal<T, E>) {
        let slot = self.slot.lock();
        slot.pending.borrow_mut().push_back(signal);

        // Re-entrant call: the outer delivery drains the queue once its handler returns.
        let Ok(mut downstream) = slot.downstream.try_borrow_mut() else {
            return;
        };

        loop {
            let next = slot.pending.borrow_mut().pop_front();
            match next {
                Some(Signal::Value(value)) => downstream.send(value),
                Some(Signal::Completion(completion)) => downstream.complete(completion),
                None => break,
            }
        }
    }
}

impl<T, E> Clone for SharedDownstream<T, E> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
            subscription: self.subscription.clone(),
        }
    }
}
