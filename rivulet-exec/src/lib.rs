// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal consumers for rivulet publishers.
//!
//! [`sink`](SinkExt::sink) subscribes a pair of closures and returns a [`Cancellable`], which
//! cancels the subscription when dropped. Handles that must outlive the current scope go into a
//! caller-owned [`CancelBag`].

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod cancellable;
pub mod sink;

pub use cancellable::{CancelBag, Cancellable};
pub use sink::SinkExt;
