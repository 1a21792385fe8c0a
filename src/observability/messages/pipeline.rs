// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline stages and procedure execution.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A message entered a component's pipeline.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use switchyard::observability::messages::pipeline::PipelineStarted;
///
/// let msg = PipelineStarted {
///     component: "uppercase",
///     stage_count: 5,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PipelineStarted<'a> {
    pub component: &'a str,
    pub stage_count: usize,
}

impl Display for PipelineStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Component '{}' pipeline started with {} stages",
            self.component, self.stage_count
        )
    }
}

impl StructuredLog for PipelineStarted<'_> {
    fn log(&self) {
        tracing::info!(
            component = self.component,
            stage_count = self.stage_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "pipeline",
            span_name = name,
            component = self.component,
            stage_count = self.stage_count,
        )
    }
}

/// The procedure is about to be invoked with bound arguments.
///
/// # Log Level
/// `debug!` - Execution detail
pub struct ProcedureInvoked<'a> {
    pub procedure: &'a str,
    pub argument_count: usize,
}

impl Display for ProcedureInvoked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Invoking procedure '{}' with {} argument(s)",
            self.procedure, self.argument_count
        )
    }
}

impl StructuredLog for ProcedureInvoked<'_> {
    fn log(&self) {
        tracing::debug!(
            procedure = self.procedure,
            argument_count = self.argument_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "procedure",
            span_name = name,
            procedure = self.procedure,
            argument_count = self.argument_count,
        )
    }
}

/// The guard stage stopped a sequence because the procedure failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use switchyard::errors::ExecutionError;
/// use switchyard::observability::messages::pipeline::ProcedureFailed;
///
/// let error = ExecutionError::new("reverse_text", "argument 'string' is missing");
/// let msg = ProcedureFailed {
///     component: "reverse",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ProcedureFailed<'a> {
    pub component: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProcedureFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Component '{}' terminated its output: {}",
            self.component, self.error
        )
    }
}

impl StructuredLog for ProcedureFailed<'_> {
    fn log(&self) {
        tracing::error!(
            component = self.component,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "procedure_failed",
            span_name = name,
            component = self.component,
            error = %self.error,
        )
    }
}

/// The configured encrypted field is absent; the record passes through.
///
/// # Log Level
/// `debug!` - Execution detail
pub struct EncryptedFieldAbsent<'a> {
    pub component: &'a str,
    pub field: &'a str,
}

impl Display for EncryptedFieldAbsent<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Component '{}': no encrypted value at '{}', passing through",
            self.component, self.field
        )
    }
}

impl StructuredLog for EncryptedFieldAbsent<'_> {
    fn log(&self) {
        tracing::debug!(component = self.component, field = self.field, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "encrypted_field_absent",
            span_name = name,
            component = self.component,
            field = self.field,
        )
    }
}

/// Placeholder resolution did not settle within the pass limit.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct SubstitutionPassLimitReached<'a> {
    pub text: &'a str,
    pub passes: usize,
}

impl Display for SubstitutionPassLimitReached<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Placeholders in '{}' still changing after {} passes; likely self-referential",
            self.text, self.passes
        )
    }
}

impl StructuredLog for SubstitutionPassLimitReached<'_> {
    fn log(&self) {
        tracing::warn!(text = self.text, passes = self.passes, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "substitution_pass_limit",
            span_name = name,
            text = self.text,
            passes = self.passes,
        )
    }
}
