// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::errors::ValidationError;

/// Decryption or deserialization failed on a value that was present.
///
/// An absent encrypted field is not an error; a present one that cannot be
/// decoded always is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("Field '{field}' could not be decrypted: {reason}")]
    Decrypt { field: String, reason: String },

    #[error("Value could not be deserialized: {reason}")]
    Deserialize { reason: String },

    #[error("Value could not be serialized: {reason}")]
    Serialize { reason: String },
}

/// The underlying procedure failed while producing a value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Procedure '{procedure}' failed: {message}")]
pub struct ExecutionError {
    pub procedure: String,
    pub message: String,
}

impl ExecutionError {
    pub fn new(procedure: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            procedure: procedure.into(),
            message: message.into(),
        }
    }
}

/// Any failure carried by a pipeline's result sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}
