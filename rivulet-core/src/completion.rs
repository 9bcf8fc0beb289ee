// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

/// Terminal signal of a subscription.
///
/// A subscriber receives at most one `Completion`, after every value it will ever see.
/// `Failed` carries a caller-chosen payload; operators relay it without looking inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion<E> {
    /// The sequence ended normally
    Finished,
    /// The sequence ended with a failure
    Failed(E),
}

impl<E> Completion<E> {
    /// Returns `true` if this is `Finished`.
    pub const fn is_finished(&self) -> bool {
        matches!(self, Completion::Finished)
    }

    /// Returns `true` if this is `Failed`.
    pub const fn is_failed(&self) -> bool {
        matches!(self, Completion::Failed(_))
    }

    /// Converts from `Completion<E>` to `Option<E>`, discarding `Finished`.
    pub fn err(self) -> Option<E> {
        match self {
            Completion::Finished => None,
            Completion::Failed(e) => Some(e),
        }
    }

    /// Maps the failure payload, leaving `Finished` untouched.
    pub fn map_err<F, G>(self, f: G) -> Completion<F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Completion::Finished => Completion::Finished,
            Completion::Failed(e) => Completion::Failed(f(e)),
        }
    }

    /// Borrows the failure payload, if any.
    pub const fn as_ref(&self) -> Completion<&E> {
        match self {
            Completion::Finished => Completion::Finished,
            Completion::Failed(e) => Completion::Failed(e),
        }
    }
}

impl<E: fmt::Display> fmt::Display for Completion<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::Finished => write!(f, "finished"),
            Completion::Failed(e) => write!(f, "failed({e})"),
        }
    }
}
