// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operators for rivulet publishers.
//!
//! Every operator is a publisher wrapping its upstream, exposed through an extension trait
//! implemented for all [`Publisher`](rivulet_core::Publisher)s. Operators hold configuration
//! only; the per-subscription state (counters, the last match, the gate flag) is created fresh on
//! each subscribe.
//!
//! ## Operator Categories
//!
//! ### Filtering Operators
//!
//! - **[`filter`](FilterExt::filter)**: Forwards values satisfying a predicate
//! - **[`compact_map`](CompactMapExt::compact_map)**: Transforms and drops `None` results
//! - **[`remove_duplicates`](RemoveDuplicatesExt::remove_duplicates)**: Suppresses consecutive repeats
//! - **[`ignore_output`](IgnoreOutputExt::ignore_output)**: Forwards only the completion
//!
//! ### Slicing Operators
//!
//! - **[`drop_first`](DropFirstExt::drop_first)** / **[`drop_while`](DropWhileExt::drop_while)**: Skip a leading run
//! - **[`prefix`](PrefixExt::prefix)** / **[`prefix_while`](PrefixWhileExt::prefix_while)**: Keep a leading run, then finish
//! - **[`first_where`](FirstWhereExt::first_where)** / **[`last_where`](LastWhereExt::last_where)**: Select one value
//!
//! ### Gating Operators
//!
//! - **[`drop_until_output_from`](DropUntilOutputFromExt::drop_until_output_from)**: Opens on a control emission
//! - **[`prefix_until_output_from`](PrefixUntilOutputFromExt::prefix_until_output_from)**: Closes on a control emission
//!
//! ### Utility Operators
//!
//! - **[`map`](MapExt::map)**, **[`tap`](TapExt::tap)**, **[`log_events`](LogEventsExt::log_events)**
//! - **[`map_error`](MapErrorExt::map_error)**, **[`set_failure_type`](SetFailureTypeExt::set_failure_type)**
//! - **[`boxed`](BoxedExt::boxed)**
//!
//! # Termination
//!
//! Operators that stop early (`prefix`, `prefix_while`, `first_where`, `prefix_until_output_from`)
//! cancel their upstream before finishing downstream, so sources stop producing as soon as the
//! result is known.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod boxed;
pub mod compact_map;
pub mod drop_first;
pub mod drop_until_output_from;
pub mod drop_while;
pub mod filter;
pub mod first_where;
pub mod ignore_output;
pub mod last_where;
pub mod log_events;
pub mod map;
pub mod map_error;
pub mod prefix;
pub mod prefix_until_output_from;
pub mod prefix_while;
pub mod remove_duplicates;
pub mod tap;

pub use self::boxed::BoxedExt;
pub use self::compact_map::{CompactMap, CompactMapExt};
pub use self::drop_first::{DropFirst, DropFirstExt};
pub use self::drop_until_output_from::{DropUntilOutputFrom, DropUntilOutputFromExt};
pub use self::drop_while::{DropWhile, DropWhileExt};
pub use self::filter::{Filter, FilterExt};
pub use self::first_where::{AnyValue, FirstWhere, FirstWhereExt};
pub use self::ignore_output::{IgnoreOutput, IgnoreOutputExt};
pub use self::last_where::{LastWhere, LastWhereExt};
pub use self::log_events::{LogEvents, LogEventsExt, LogWriter};
pub use self::map::{Map, MapExt};
pub use self::map_error::{MapError, MapErrorExt, SetFailureTypeExt, Unreachable};
pub use self::prefix::{Prefix, PrefixExt};
pub use self::prefix_until_output_from::{PrefixUntilOutputFrom, PrefixUntilOutputFromExt};
pub use self::prefix_while::{PrefixWhile, PrefixWhileExt};
pub use self::remove_duplicates::{DefaultEquality, RemoveDuplicates, RemoveDuplicatesExt};
pub use self::tap::{Tap, TapExt};
