// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod keypath;
mod pipeline;
mod transport;

pub use config::{ConfigError, ValidationError};
pub use keypath::KeyPathError;
pub use pipeline::{CodecError, ExecutionError, PipelineError};
pub use transport::{TransportError, WorkerError};
