// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use super::procedures::*;
use crate::traits::Procedure;

/// Factory for creating local (in-process) procedure instances
pub struct LocalProcedureFactory;

impl LocalProcedureFactory {
    /// Create a procedure from its `shell.procedure` name
    ///
    /// - "change_text_case_upper" -> ChangeTextCaseProcedure (uppercase)
    /// - "change_text_case_lower" -> ChangeTextCaseProcedure (lowercase)
    /// - "change_text_case_proper" -> ChangeTextCaseProcedure (proper case)
    /// - "change_text_case_title" -> ChangeTextCaseProcedure (title case)
    /// - "reverse_text" -> ReverseTextProcedure
    /// - "snake_case" -> SnakeCaseProcedure
    /// - "camel_case" -> CamelCaseProcedure
    /// - "concatenate" -> ConcatenateProcedure
    /// - "split_lines" -> SplitLinesProcedure (streams its outputs)
    pub fn create_procedure(name: &str) -> Option<Arc<dyn Procedure>> {
        match name {
            // Text case procedures
            "change_text_case_upper" => Some(Arc::new(ChangeTextCaseProcedure::upper())),
            "change_text_case_lower" => Some(Arc::new(ChangeTextCaseProcedure::lower())),
            "change_text_case_proper" => Some(Arc::new(ChangeTextCaseProcedure::proper())),
            "change_text_case_title" => Some(Arc::new(ChangeTextCaseProcedure::title())),

            // Text manipulation procedures
            "reverse_text" => Some(Arc::new(ReverseTextProcedure::new())),
            "snake_case" => Some(Arc::new(SnakeCaseProcedure)),
            "camel_case" => Some(Arc::new(CamelCaseProcedure)),
            "concatenate" => Some(Arc::new(ConcatenateProcedure)),

            // Streaming procedures
            "split_lines" => Some(Arc::new(SplitLinesProcedure)),

            _ => None,
        }
    }

    /// List all available local procedure names
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec![
            "change_text_case_upper",
            "change_text_case_lower",
            "change_text_case_proper",
            "change_text_case_title",
            "reverse_text",
            "snake_case",
            "camel_case",
            "concatenate",
            "split_lines",
        ]
    }

    /// Check if a procedure name is available
    pub fn is_implementation_available(name: &str) -> bool {
        Self::list_available_implementations().contains(&name)
    }
}
