// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core contracts of the rivulet push-based pipeline engine.
//!
//! - [`Publisher`]: something that can be subscribed to
//! - [`Subscriber`]: something that receives values and one terminal [`Completion`]
//! - [`Subscription`]: the cancellable link between the two
//! - [`PassthroughSubject`]: a publisher that external code pushes values into
//! - [`Sequence`], [`Empty`], [`Fail`]: finite, eagerly driven publishers
//!
//! Operators live in `rivulet-stream`; terminal consumers in `rivulet-exec`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod completion;
pub mod error;
pub mod publisher;
pub mod sequence;
pub mod shared_downstream;
pub mod subject;
pub mod subscriber;
pub mod subscription;

pub use self::completion::Completion;
pub use self::error::{Result, RivuletError};
pub use self::publisher::{BoxPublisher, Publisher};
pub use self::sequence::{sequence, Empty, Fail, Sequence};
pub use self::shared_downstream::SharedDownstream;
pub use self::subject::PassthroughSubject;
pub use self::subscriber::{BoxSubscriber, Downstream, Subscriber};
pub use self::subscription::Subscription;
