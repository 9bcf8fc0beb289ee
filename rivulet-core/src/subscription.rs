// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellable link between one publisher and one subscriber.
//!
//! A [`Subscription`] is a shared cancellation token. Clones observe the same state, so the
//! publisher can poll [`is_cancelled`](Subscription::is_cancelled) before every delivery while the
//! consumer holds another clone to call [`cancel`](Subscription::cancel).
//!
//! Cancellation propagates upward through [`child`](Subscription::child): an operator subscribes to
//! its upstream with a child of its own downstream token, so cancelling the outermost subscription
//! cancels the whole chain before `cancel()` returns.
//!
//! ## Example
//!
//! ```
//! use rivulet_core::Subscription;
//!
//! let downstream = Subscription::new();
//! let upstream = downstream.child();
//!
//! downstream.cancel();
//! assert!(upstream.is_cancelled());
//!
//! // Idempotent
//! downstream.cancel();
//! ```

use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Teardown = Box<dyn FnOnce() + Send>;

struct Inner {
    cancelled: AtomicBool,
    teardowns: Mutex<Vec<Teardown>>,
}

/// Shared cancellation token for one delivery path.
///
/// Teardown callbacks registered with [`on_cancel`](Self::on_cancel) run exactly once, on the
/// first call to [`cancel`](Self::cancel), on the calling thread. Calling `cancel` again, from
/// anywhere (including from inside a value handler), has no further effect.
#[derive(Clone)]
pub struct Subscription {
    inner: Arc<Inner>,
}

impl Subscription {
    /// Creates a live subscription with no teardowns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                cancelled: AtomicBool::new(false),
                teardowns: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Creates a subscription that is already cancelled.
    ///
    /// Handed out by publishers that will never deliver anything, such as a completed subject.
    #[must_use]
    pub fn cancelled() -> Self {
        let subscription = Self::new();
        subscription.cancel();
        subscription
    }

    /// Cancels the subscription and runs its teardowns.
    pub fn cancel(&self) {
        if self.inner.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }

        // Teardowns may cancel other subscriptions; never run them under the lock.
        let teardowns = std::mem::take(&mut *self.inner.teardowns.lock());
        for teardown in teardowns {
            teardown();
        }
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Registers `teardown` to run when this subscription is cancelled.
    ///
    /// If the subscription is already cancelled, `teardown` runs immediately.
    pub fn on_cancel<F>(&self, teardown: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut teardowns = self.inner.teardowns.lock();
        if self.is_cancelled() {
            drop(teardowns);
            teardown();
            return;
        }
        teardowns.push(Box::new(teardown));
    }

    /// Creates a subscription that is cancelled whenever this one is.
    ///
    /// Cancelling the child does not cancel the parent.
    #[must_use]
    pub fn child(&self) -> Self {
        let child = Self::new();
        let linked = child.clone();
        self.on_cancel(move || linked.cancel());
        child
    }

    /// Returns `true` if both handles refer to the same subscription.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}
