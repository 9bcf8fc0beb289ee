// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the rivulet workspace.
//!
//! Designed for use in development and testing only, not for production code.
//!
//! # Key Types
//!
//! - [`Recorder`] - a subscriber that logs every value and completion it receives
//! - [`Probe`] - a transparent publisher wrapper counting what the source delivered and whether
//!   it was cancelled
//! - [`TestError`] - failure payload for error-path tests
//!
//! # Module Organization
//!
//! - `recorder` - `Recorder<T, E>` and `Event<T, E>`
//! - `probe` - `Probe<P>` and `ProbeStats`
//! - `test_data`, `person` - fixtures
//! - `helpers` - one-call recording of eager publishers

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod person;
pub mod probe;
pub mod recorder;
pub mod test_data;
pub mod test_error;

pub use helpers::{record, values_of};
pub use probe::{Probe, ProbeStats};
pub use recorder::{Event, Recorder};
pub use test_error::TestError;
