// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::recorder::Recorder;
use rivulet_core::Publisher;

/// Subscribes a fresh [`Recorder`] to `publisher` and returns it.
///
/// Meant for eager publishers, which have delivered everything by the time this returns.
pub fn record<P>(publisher: &P) -> Recorder<P::Output, P::Failure>
where
    P: Publisher,
    P::Output: Send + 'static,
    P::Failure: Send + 'static,
{
    let recorder = Recorder::new();
    let _subscription = publisher.subscribe(recorder.clone());
    recorder
}

/// The values an eager publisher delivers to a single subscriber.
pub fn values_of<P>(publisher: &P) -> Vec<P::Output>
where
    P: Publisher,
    P::Output: Clone + Send + 'static,
    P::Failure: Clone + Send + 'static,
{
    record(publisher).values()
}
