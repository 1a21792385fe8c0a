// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading component documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("Unsupported config file format: '{}'", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The document parsed but does not describe a component.
    #[error("Invalid component config: {reason}")]
    Invalid { reason: String },
}

/// Structural problems that make a component impossible to run.
///
/// These are fatal and surface when a pipeline is constructed, before any
/// message is processed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// `input.bindings` exists but is not a map of argument name to path.
    #[error("Component '{component}': input.bindings must be a map, found {found}")]
    MalformedBindings { component: String, found: String },

    /// `shell.procedure` is missing.
    #[error("Component '{component}' does not declare shell.procedure")]
    MissingProcedure { component: String },

    /// `shell.procedure` names nothing the backend knows about.
    #[error("Component '{component}': unknown procedure '{procedure}'")]
    UnknownProcedure { component: String, procedure: String },

    /// `shell.language` names a backend that is not available.
    #[error("Component '{component}': unsupported procedure language '{language}'")]
    UnsupportedLanguage { component: String, language: String },

    /// `encryption` is present but is not a `{field, key}` map of strings.
    #[error("Component '{component}': malformed encryption settings: {reason}")]
    MalformedEncryption { component: String, reason: String },

    /// `encryption` is configured but the pipeline was built without a cipher.
    #[error("Component '{component}' configures encryption but no cipher was provided")]
    MissingCipher { component: String },
}
