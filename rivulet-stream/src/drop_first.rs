// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drop-first operator that skips the first n values.

use rivulet_core::{Completion, Downstream, Publisher, Subscriber};

/// Publisher returned by [`DropFirstExt::drop_first`].
pub struct DropFirst<P> {
    upstream: P,
    count: usize,
}

struct DropFirstSubscriber<T, E> {
    downstream: Downstream<T, E>,
    count: usize,
    dropped: usize,
}

impl<T, E> Subscriber<T, E> for DropFirstSubscriber<T, E> {
    fn on_value(&mut self, value: T) {
        if self.dropped < self.count {
            self.dropped += 1;
            return;
        }
        self.downstream.send(value);
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        self.downstream.complete(completion);
    }
}

impl<P> Publisher for DropFirst<P>
where
    P: Publisher,
    P::Output: Send + 'static,
    P::Failure: Send + 'static,
{
    type Output = P::Output;
    type Failure = P::Failure;

    fn attach(&self, downstream: Downstream<P::Output, P::Failure>) {
        let upstream = downstream.subscription().child();
        self.upstream.attach(Downstream::new(
            DropFirstSubscriber {
                downstream,
                count: self.count,
                dropped: 0,
            },
            upstream,
        ));
    }
}

/// Extension trait providing the `drop_first` operator for publishers.
pub trait DropFirstExt: Publisher + Sized {
    /// Skips the first `count` values and forwards everything after them.
    ///
    /// If the upstream delivers `count` values or fewer, nothing is forwarded but the completion.
    /// `drop_first(0)` forwards everything.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::Sequence;
    /// use rivulet_stream::DropFirstExt;
    /// use rivulet_test_utils::values_of;
    ///
    /// assert_eq!(values_of(&Sequence::new(1..=10).drop_first(8)), vec![9, 10]);
    /// ```
    ///
    /// # See Also
    ///
    /// - [`PrefixExt::prefix`](crate::PrefixExt::prefix) - Keep only the first n values
    /// - [`DropWhileExt::drop_while`](crate::DropWhileExt::drop_while) - Skip by predicate
    fn drop_first(self, count: usize) -> DropFirst<Self>;
}

impl<P: Publisher> DropFirstExt for P {
    fn drop_first(self, count: usize) -> DropFirst<Self> {
        DropFirst {
            upstream: self,
            count,
        }
    }
}
