// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::errors::PipelineError;

/// Failures reported by a transport implementation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("Queue '{queue}' is not declared")]
    UnknownQueue { queue: String },

    #[error("Transport failure: {0}")]
    Other(String),
}

/// Failures while a worker handles a delivery.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkerError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}
