// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for component document loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// A config file was read and yielded components.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use std::path::Path;
/// use switchyard::observability::messages::config::ConfigFileLoaded;
///
/// let msg = ConfigFileLoaded {
///     path: Path::new("components/uppercase.json"),
///     component_count: 1,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ConfigFileLoaded<'a> {
    pub path: &'a Path,
    pub component_count: usize,
}

impl Display for ConfigFileLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} component(s) from '{}'",
            self.component_count,
            self.path.display()
        )
    }
}

impl StructuredLog for ConfigFileLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            component_count = self.component_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_file_loaded",
            span_name = name,
            path = %self.path.display(),
            component_count = self.component_count,
        )
    }
}

/// A document inside a config file was ignored.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct ConfigDocumentSkipped<'a> {
    pub path: &'a Path,
    pub reason: &'a str,
}

impl Display for ConfigDocumentSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Skipping document in '{}': {}",
            self.path.display(),
            self.reason
        )
    }
}

impl StructuredLog for ConfigDocumentSkipped<'_> {
    fn log(&self) {
        tracing::warn!(
            path = %self.path.display(),
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "config_document_skipped",
            span_name = name,
            path = %self.path.display(),
            reason = self.reason,
        )
    }
}
