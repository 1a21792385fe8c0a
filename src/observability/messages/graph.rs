// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for topology derivation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Graph building started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use switchyard::observability::messages::graph::GraphBuildStarted;
///
/// let msg = GraphBuildStarted {
///     seed_count: 2,
///     config_count: 7,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct GraphBuildStarted {
    pub seed_count: usize,
    pub config_count: usize,
}

impl Display for GraphBuildStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Deriving topology from {} seed key(s) over {} component(s)",
            self.seed_count, self.config_count
        )
    }
}

impl StructuredLog for GraphBuildStarted {
    fn log(&self) {
        tracing::info!(
            seed_count = self.seed_count,
            config_count = self.config_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "graph_build",
            span_name = name,
            seed_count = self.seed_count,
            config_count = self.config_count,
        )
    }
}

/// Graph building completed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct GraphBuildCompleted {
    pub node_count: usize,
    pub link_count: usize,
    pub duration: std::time::Duration,
}

impl Display for GraphBuildCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Topology derived: {} nodes, {} links in {:?}",
            self.node_count, self.link_count, self.duration
        )
    }
}

impl StructuredLog for GraphBuildCompleted {
    fn log(&self) {
        tracing::info!(
            node_count = self.node_count,
            link_count = self.link_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "graph_build_completed",
            span_name = name,
            node_count = self.node_count,
            link_count = self.link_count,
            duration = ?self.duration,
        )
    }
}

/// An (edge, component) pair was already expanded and is not walked again.
///
/// # Log Level
/// `debug!` - Traversal detail
pub struct ExpansionRevisited<'a> {
    pub edge: &'a str,
    pub component: &'a str,
}

impl Display for ExpansionRevisited<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Edge '{}' was already matched against component '{}'",
            self.edge, self.component
        )
    }
}

impl StructuredLog for ExpansionRevisited<'_> {
    fn log(&self) {
        tracing::debug!(edge = self.edge, component = self.component, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "expansion_revisited",
            span_name = name,
            edge = self.edge,
            component = self.component,
        )
    }
}

/// An output pattern derived to a key with no tokens and was dropped.
///
/// # Log Level
/// `debug!` - Traversal detail
pub struct EmptyDerivedKey<'a> {
    pub component: &'a str,
    pub pattern: &'a str,
}

impl Display for EmptyDerivedKey<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Output pattern '{}' of component '{}' derived an empty key",
            self.pattern, self.component
        )
    }
}

impl StructuredLog for EmptyDerivedKey<'_> {
    fn log(&self) {
        tracing::debug!(component = self.component, pattern = self.pattern, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "empty_derived_key",
            span_name = name,
            component = self.component,
            pattern = self.pattern,
        )
    }
}
