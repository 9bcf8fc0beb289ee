// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber subject.
//!
//! A [`PassthroughSubject`] is a publisher that external code pushes into. Each value is
//! delivered synchronously, in call order, to every subscriber attached at the time of the call.
//!
//! ## Characteristics
//!
//! - **Hot**: Late subscribers do not receive past values, only values sent after subscribing.
//! - **Synchronous**: `send` returns once every current subscriber has handled the value.
//! - **Ordered**: Signals sent from inside a handler are queued, so every subscriber observes
//!   the same call order.
//! - **Cheap to clone**: All clones share the same subscriber set.
//! - **Terminal**: After a completion, further sends are ignored and new subscribers receive nothing.
//!
//! ## Example
//!
//! ```
//! use rivulet_core::{Completion, PassthroughSubject, Publisher, Subscriber};
//! use std::sync::{Arc, Mutex};
//!
//! struct Collect(Arc<Mutex<Vec<i32>>>);
//!
//! impl Subscriber<i32, ()> for Collect {
//!     fn on_value(&mut self, value: i32) {
//!         self.0.lock().unwrap().push(value);
//!     }
//!     fn on_completion(&mut self, _completion: Completion<()>) {}
//! }
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let subject = PassthroughSubject::<i32, ()>::new();
//! let _subscription = subject.subscribe(Collect(seen.clone()));
//!
//! subject.send(1);
//! subject.send(2);
//! subject.finish();
//! subject.send(3); // ignored
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! ```

use crate::{Completion, Downstream, Publisher, RivuletError, SharedDownstream};
use parking_lot::{Mutex, ReentrantMutex};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::{Arc, Weak};

struct SubjectState<T, E> {
    completed: bool,
    next_id: u64,
    subscribers: Vec<(u64, SharedDownstream<T, E>)>,
}

enum Pending<T, E> {
    Value(T),
    Completion(Completion<E>),
}

/// Signals waiting for the delivery in progress on the owning thread.
struct Delivery<T, E> {
    draining: bool,
    queue: VecDeque<Pending<T, E>>,
}

/// A hot subject that relays pushed values to all current subscribers.
///
/// See the [module documentation](self) for examples and more details.
pub struct PassthroughSubject<T, E = RivuletError> {
    state: Arc<Mutex<SubjectState<T, E>>>,
    delivery: Arc<ReentrantMutex<RefCell<Delivery<T, E>>>>,
}

impl<T, E> PassthroughSubject<T, E> {
    /// Creates a new subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                completed: false,
                next_id: 0,
                subscribers: Vec::new(),
            })),
            delivery: Arc::new(ReentrantMutex::new(RefCell::new(Delivery {
                draining: false,
                queue: VecDeque::new(),
            }))),
        }
    }

    /// Returns `true` once a completion has been sent.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state.lock().completed
    }

    /// Returns the number of attached subscribers.
    ///
    /// Cancelled subscribers are removed as part of their cancellation.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().subscribers.len()
    }
}

impl<T: Clone, E: Clone> PassthroughSubject<T, E> {
    /// Delivers `value` to every current subscriber.
    ///
    /// Ignored once the subject has completed. A send made from inside a subscriber's handler is
    /// delivered to every subscriber after the signal in progress.
    pub fn send(&self, value: T) {
        let delivery = self.delivery.lock();
        if self.state.lock().completed {
            debug!("send on a completed subject ignored");
            return;
        }
        delivery.borrow_mut().queue.push_back(Pending::Value(value));
        self.drain(&delivery);
    }

    /// Delivers `completion` to every current subscriber and marks the subject completed.
    ///
    /// Only the first completion has an effect.
    pub fn send_completion(&self, completion: Completion<E>) {
        let delivery = self.delivery.lock();
        {
            let mut state = self.state.lock();
            if state.completed {
                debug!("completion on a completed subject ignored");
                return;
            }
            state.completed = true;
        }
        delivery
            .borrow_mut()
            .queue
            .push_back(Pending::Completion(completion));
        self.drain(&delivery);
    }

    fn drain(&self, delivery: &RefCell<Delivery<T, E>>) {
        // Re-entrant call: the outer call picks the signal up once its current one is delivered.
        if delivery.borrow().draining {
            return;
        }
        delivery.borrow_mut().draining = true;

        loop {
            let next = delivery.borrow_mut().queue.pop_front();
            match next {
                Some(Pending::Value(value)) => {
                    let targets: Vec<SharedDownstream<T, E>> = self
                        .state
                        .lock()
                        .subscribers
                        .iter()
                        .map(|(_, downstream)| downstream.clone())
                        .collect();
                    for downstream in targets {
                        downstream.send(value.clone());
                    }
                }
                Some(Pending::Completion(completion)) => {
                    let targets = std::mem::take(&mut self.state.lock().subscribers);
                    debug!("subject completed with {} subscriber(s)", targets.len());
                    for (_, downstream) in targets {
                        downstream.complete(completion.clone());
                    }
                }
                None => break,
            }
        }

        delivery.borrow_mut().draining = false;
    }

    /// Shorthand for `send_completion(Completion::Finished)`.
    pub fn finish(&self) {
        self.send_completion(Completion::Finished);
    }

    /// Shorthand for `send_completion(Completion::Failed(error))`.
    pub fn fail(&self, error: E) {
        self.send_completion(Completion::Failed(error));
    }
}

impl<T, E> Publisher for PassthroughSubject<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    type Output = T;
    type Failure = E;

    fn attach(&self, downstream: Downstream<T, E>) {
        let subscription = downstream.subscription().clone();
        let id = {
            let mut state = self.state.lock();
            if state.completed {
                None
            } else {
                let id = state.next_id;
                state.next_id += 1;
                state
                    .subscribers
                    .push((id, SharedDownstream::new(downstream)));
                Some(id)
            }
        };

        let Some(id) = id else {
            debug!("subscription to a completed subject is inert");
            subscription.cancel();
            return;
        };

        // Weak: a subject that is dropped without completing must not be kept alive by its
        // subscribers' teardowns.
        let state: Weak<Mutex<SubjectState<T, E>>> = Arc::downgrade(&self.state);
        subscription.on_cancel(move || {
            let Some(state) = state.upgrade() else {
                return;
            };
            // Dropped outside the lock: releasing a subscriber may run arbitrary drop code.
            let removed = {
                let mut state = state.lock();
                state
                    .subscribers
                    .iter()
                    .position(|(entry, _)| *entry == id)
                    .map(|index| state.subscribers.remove(index))
            };
            drop(removed);
        });
    }
}

impl<T, E> Default for PassthroughSubject<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for PassthroughSubject<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            delivery: Arc::clone(&self.delivery),
        }
    }
}
