// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised by dot-path lookups and writes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyPathError {
    /// The path does not address any value and no default was supplied.
    #[error("Key '{path}' not found in the provided data")]
    NotFound { path: String },

    /// A non-numeric segment was used to address a sequence.
    #[error("Segment '{segment}' of key '{path}' is not a valid sequence index")]
    InvalidIndex { path: String, segment: String },
}
