// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Rivulet
//!
//! Push-based reactive pipelines: a source emits values over time, a chain of stateful operators
//! filters, slices or gates them, and a terminal consumer receives what is left plus exactly one
//! completion.
//!
//! ## Overview
//!
//! - **Publishers** describe a pipeline; nothing runs until something subscribes, and every
//!   subscription gets its own operator state.
//! - **Subscriptions** are cancellable. Cancellation travels upstream through every operator and
//!   detaches the subscriber from its sources.
//! - **Subjects** let imperative code push values and a completion into a pipeline.
//! - **Operators** come as extension traits, imported together through [`prelude`].
//!
//! ## Quick Start
//!
//! ```rust
//! use rivulet::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let received = Arc::new(Mutex::new(Vec::new()));
//! let sink = received.clone();
//! let mut bag = CancelBag::new();
//!
//! Sequence::new(1..=100)
//!     .drop_first(50)
//!     .prefix(20)
//!     .filter(|n| n % 2 == 0)
//!     .sink_values(move |n| sink.lock().unwrap().push(n))
//!     .store(&mut bag);
//!
//! assert_eq!(
//!     *received.lock().unwrap(),
//!     vec![52, 54, 56, 58, 60, 62, 64, 66, 68, 70]
//! );
//! ```
//!
//! ## Gating With a Second Source
//!
//! ```rust
//! use rivulet::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let taps = PassthroughSubject::<i32>::new();
//! let ready = PassthroughSubject::<()>::new();
//! let received = Arc::new(Mutex::new(Vec::new()));
//! let sink = received.clone();
//!
//! let _cancellable = taps
//!     .clone()
//!     .drop_until_output_from(ready.clone())
//!     .sink(move |n| sink.lock().unwrap().push(n), |_| {});
//!
//! taps.send(1);
//! ready.send(());
//! taps.send(2);
//!
//! assert_eq!(*received.lock().unwrap(), vec![2]);
//! ```

pub use rivulet_core::{
    sequence, BoxPublisher, Completion, Empty, Fail, PassthroughSubject, Publisher, Result,
    RivuletError, Sequence, Subscriber, Subscription,
};
pub use rivulet_exec::{CancelBag, Cancellable};

// Re-export the operator crate and the types its operators name in their signatures
pub use rivulet_stream;
pub use rivulet_stream::{AnyValue, DefaultEquality, LogWriter, Unreachable};

/// Prelude module for convenient imports
pub mod prelude {
    pub use rivulet_core::{
        Completion, Empty, Fail, PassthroughSubject, Publisher, RivuletError, Sequence,
        Subscriber, Subscription,
    };
    pub use rivulet_exec::{CancelBag, Cancellable, SinkExt};
    pub use rivulet_stream::{
        BoxedExt, CompactMapExt, DropFirstExt, DropUntilOutputFromExt, DropWhileExt, FilterExt,
        FirstWhereExt, IgnoreOutputExt, LastWhereExt, LogEventsExt, MapErrorExt, MapExt,
        PrefixExt, PrefixUntilOutputFromExt, PrefixWhileExt, RemoveDuplicatesExt,
        SetFailureTypeExt, TapExt,
    };
}
