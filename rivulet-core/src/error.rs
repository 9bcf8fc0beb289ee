// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ready-made failure payload for pipelines that do not bring their own.
//!
//! Pipelines are generic over their failure type; operators never construct or inspect it.
//! [`RivuletError`] is the default failure of [`PassthroughSubject`](crate::PassthroughSubject)
//! and a convenient target for wrapping errors raised by user code.
//!
//! # Examples
//!
//! ```
//! use rivulet_core::{Completion, RivuletError};
//!
//! let completion: Completion<RivuletError> =
//!     Completion::Failed(RivuletError::stream_error("sensor offline"));
//! assert!(completion.is_failed());
//! ```

/// Root error type for failures carried through rivulet pipelines.
#[derive(Debug, thiserror::Error)]
pub enum RivuletError {
    /// Stream processing encountered an error
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided callbacks so they can travel as a `Failed`
    /// completion.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RivuletError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }
}

/// Specialized Result type for rivulet operations
pub type Result<T> = std::result::Result<T, RivuletError>;

impl Clone for RivuletError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed source cannot be cloned; keep its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
        }
    }
}

impl PartialEq for RivuletError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
