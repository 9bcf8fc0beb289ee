// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use parking_lot::Mutex;
use rivulet_core::{Completion, Subscriber, Subscription};
use std::sync::Arc;

/// One signal observed by a [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<T, E> {
    Value(T),
    Completed(Completion<E>),
}

/// Subscriber that records every signal it receives.
///
/// Clones share the same log: subscribe one clone and assert on another.
///
/// ```rust
/// use rivulet_core::{Publisher, Sequence};
/// use rivulet_test_utils::Recorder;
///
/// let recorder = Recorder::new();
/// let _subscription = Sequence::new(1..=3).subscribe(recorder.clone());
///
/// assert_eq!(recorder.values(), vec![1, 2, 3]);
/// assert!(recorder.is_finished());
/// ```
pub struct Recorder<T, E> {
    events: Arc<Mutex<Vec<Event<T, E>>>>,
    cancel_after: Option<usize>,
    subscription: Option<Subscription>,
}

impl<T, E> Recorder<T, E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            cancel_after: None,
            subscription: None,
        }
    }

    /// A recorder that cancels its own subscription from inside the handler of value `n`.
    #[must_use]
    pub fn cancelling_after(n: usize) -> Self {
        Self {
            cancel_after: Some(n),
            ..Self::new()
        }
    }

    /// Number of values received so far.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, Event::Value(_)))
            .count()
    }

    /// Number of completions received so far (never more than one for a correct publisher).
    #[must_use]
    pub fn completion_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| matches!(event, Event::Completed(_)))
            .count()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completion_count() > 0
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.events
            .lock()
            .iter()
            .any(|event| matches!(event, Event::Completed(Completion::Finished)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl<T: Clone, E: Clone> Recorder<T, E> {
    /// Every recorded signal, in arrival order.
    #[must_use]
    pub fn events(&self) -> Vec<Event<T, E>> {
        self.events.lock().clone()
    }

    /// Recorded values, in arrival order.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::Value(value) => Some(value.clone()),
                Event::Completed(_) => None,
            })
            .collect()
    }

    /// The recorded completion, if any.
    #[must_use]
    pub fn completion(&self) -> Option<Completion<E>> {
        self.events.lock().iter().find_map(|event| match event {
            Event::Completed(completion) => Some(completion.clone()),
            Event::Value(_) => None,
        })
    }
}

impl<T, E> Subscriber<T, E> for Recorder<T, E> {
    fn on_subscribe(&mut self, subscription: &Subscription) {
        self.subscription = Some(subscription.clone());
    }

    fn on_value(&mut self, value: T) {
        let received = {
            let mut events = self.events.lock();
            events.push(Event::Value(value));
            events
                .iter()
                .filter(|event| matches!(event, Event::Value(_)))
                .count()
        };

        if self.cancel_after == Some(received) {
            if let Some(subscription) = &self.subscription {
                subscription.cancel();
            }
        }
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        self.events.lock().push(Event::Completed(completion));
    }
}

impl<T, E> Default for Recorder<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for Recorder<T, E> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
            cancel_after: self.cancel_after,
            subscription: self.subscription.clone(),
        }
    }
}
