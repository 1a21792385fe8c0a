// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! This module provides centralized message types for diagnostic and
//! operational logging throughout switchyard. Message types follow a
//! struct-based pattern with a `Display` implementation so log lines are not
//! scattered as magic strings, and a `StructuredLog` implementation so the
//! same event carries typed fields for `tracing` subscribers.
//!
//! # Usage
//!
//! ```rust
//! use switchyard::errors::ExecutionError;
//! use switchyard::observability::messages::pipeline::ProcedureFailed;
//!
//! let error = ExecutionError::new("concatenate", "argument 'string_list' is missing");
//! let msg = ProcedureFailed {
//!     component: "joiner",
//!     error: &error,
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;
