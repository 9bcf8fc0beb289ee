// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::Cancellable;
use core::convert::Infallible;
use rivulet_core::{Completion, Publisher, Subscriber};

struct SinkSubscriber<V, C> {
    on_value: V,
    on_completion: Option<C>,
}

impl<T, E, V, C> Subscriber<T, E> for SinkSubscriber<V, C>
where
    V: FnMut(T),
    C: FnOnce(Completion<E>),
{
    fn on_value(&mut self, value: T) {
        (self.on_value)(value);
    }

    fn on_completion(&mut self, completion: Completion<E>) {
        if let Some(on_completion) = self.on_completion.take() {
            on_completion(completion);
        }
    }
}

/// Extension trait attaching closure-based consumers to publishers.
pub trait SinkExt: Publisher + Sized {
    /// Subscribes `on_value` and `on_completion` and returns the handle that keeps the
    /// subscription alive.
    ///
    /// Dropping the returned [`Cancellable`] cancels the subscription; bind it, or
    /// [`store`](Cancellable::store) it in a [`CancelBag`](crate::CancelBag).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::{Completion, Sequence};
    /// use rivulet_exec::SinkExt;
    /// use rivulet_stream::FilterExt;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let evens = Arc::new(Mutex::new(Vec::new()));
    /// let sink = evens.clone();
    ///
    /// let _cancellable = Sequence::new(1..=6).filter(|n| n % 2 == 0).sink(
    ///     move |n| sink.lock().unwrap().push(n),
    ///     |completion| assert_eq!(completion, Completion::Finished),
    /// );
    ///
    /// assert_eq!(*evens.lock().unwrap(), vec![2, 4, 6]);
    /// ```
    fn sink<V, C>(&self, on_value: V, on_completion: C) -> Cancellable
    where
        V: FnMut(Self::Output) + Send + 'static,
        C: FnOnce(Completion<Self::Failure>) + Send + 'static;

    /// Subscribes `on_value` to a publisher that cannot fail, ignoring the completion.
    fn sink_values<V>(&self, on_value: V) -> Cancellable
    where
        Self: Publisher<Failure = Infallible>,
        V: FnMut(Self::Output) + Send + 'static;
}

impl<P: Publisher> SinkExt for P {
    fn sink<V, C>(&self, on_value: V, on_completion: C) -> Cancellable
    where
        V: FnMut(Self::Output) + Send + 'static,
        C: FnOnce(Completion<Self::Failure>) + Send + 'static,
    {
        let subscription = self.subscribe(SinkSubscriber {
            on_value,
            on_completion: Some(on_completion),
        });
        Cancellable::new(subscription)
    }

    fn sink_values<V>(&self, on_value: V) -> Cancellable
    where
        Self: Publisher<Failure = Infallible>,
        V: FnMut(Self::Output) + Send + 'static,
    {
        self.sink(on_value, |_: Completion<Infallible>| {})
    }
}
