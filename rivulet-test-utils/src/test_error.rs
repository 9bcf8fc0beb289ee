// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Failure payload used across the test suites.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestError {
    #[error("boom: {0}")]
    Boom(String),
}

impl TestError {
    pub fn boom(message: impl Into<String>) -> Self {
        Self::Boom(message.into())
    }
}
