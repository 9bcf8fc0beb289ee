// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{Completion, Downstream, Publisher, Subscriber};

/// Publisher returned by [`IgnoreOutputExt::ignore_output`].
pub struct IgnoreOutput<P> {
    upstream: P,
}

struct IgnoreOutputSubscriber<T, E> {
    downstream: Downstream<T, E>,
}

impl<T, E> Subscriber<T, E> for IgnoreOutputSubscriber<T, E> {
    fn on_value(&mut self, _value: T) {}

    fn on_completion(&mut self, completion: Completion<E>) {
        self.downstream.complete(completion);
    }
}

impl<P> Publisher for IgnoreOutput<P>
where
    P: Publisher,
    P::Output: Send + 'static,
    P::Failure: Send + 'static,
{
    type Output = P::Output;
    type Failure = P::Failure;

    fn attach(&self, downstream: Downstream<P::Output, P::Failure>) {
        let upstream = downstream.subscription().child();
        self.upstream
            .attach(Downstream::new(IgnoreOutputSubscriber { downstream }, upstream));
    }
}

/// Extension trait providing the `ignore_output` operator for publishers.
pub trait IgnoreOutputExt: Publisher + Sized {
    /// Drops every value and forwards only the completion.
    ///
    /// The upstream is still driven to its end; only the outcome is observed.
    fn ignore_output(self) -> IgnoreOutput<Self>;
}

impl<P: Publisher> IgnoreOutputExt for P {
    fn ignore_output(self) -> IgnoreOutput<Self> {
        IgnoreOutput { upstream: self }
    }
}
