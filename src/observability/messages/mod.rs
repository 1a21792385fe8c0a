// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] for emitting the same event with typed fields.
//!
//! # Organization
//!
//! * `config` - Component document loading
//! * `graph` - Topology derivation
//! * `pipeline` - Stage and procedure execution
//! * `transport` - Queue bindings, deliveries and publishing
//!
//! # Usage Pattern
//!
//! ```rust
//! use switchyard::observability::messages::StructuredLog;
//! use switchyard::observability::messages::graph::GraphBuildStarted;
//!
//! let msg = GraphBuildStarted {
//!     seed_count: 1,
//!     config_count: 5,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod config;
pub mod graph;
pub mod pipeline;
pub mod transport;

/// Emit a message as a structured tracing event or open a span carrying its
/// fields.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
