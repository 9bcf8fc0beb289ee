// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_core::{BoxPublisher, Publisher};

/// Extension trait erasing the concrete type of an operator chain.
pub trait BoxedExt: Publisher + Sized {
    /// Boxes the publisher, so chains built on different branches share one type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet_core::{BoxPublisher, Sequence};
    /// use rivulet_stream::{BoxedExt, FilterExt, PrefixExt};
    /// use rivulet_test_utils::values_of;
    /// use std::convert::Infallible;
    ///
    /// fn numbers(evens: bool) -> BoxPublisher<i32, Infallible> {
    ///     if evens {
    ///         Sequence::new(1..=6).filter(|n| n % 2 == 0).boxed()
    ///     } else {
    ///         Sequence::new(1..=6).prefix(2).boxed()
    ///     }
    /// }
    ///
    /// assert_eq!(values_of(&numbers(true)), vec![2, 4, 6]);
    /// assert_eq!(values_of(&numbers(false)), vec![1, 2]);
    /// ```
    fn boxed(self) -> BoxPublisher<Self::Output, Self::Failure>
    where
        Self: Send + Sync + 'static;
}

impl<P: Publisher> BoxedExt for P {
    fn boxed(self) -> BoxPublisher<Self::Output, Self::Failure>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}
