// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use super::change_text_case::capitalize;
use super::{string_arg, STRING_ARG};
use crate::errors::ExecutionError;
use crate::traits::{Arguments, Procedure, Yielded};

/// Joins the whitespace-separated words of `string` with underscores.
#[derive(Default)]
pub struct SnakeCaseProcedure;

impl Procedure for SnakeCaseProcedure {
    fn invoke(&self, args: Arguments) -> Result<Yielded, ExecutionError> {
        let input = string_arg(self.name(), &args, STRING_ARG)?;
        let words: Vec<&str> = input.split_whitespace().collect();
        Ok(Yielded::Value(Value::String(words.join("_"))))
    }

    fn name(&self) -> &str {
        "snake_case"
    }
}

/// Capitalizes each word of `string` and joins them without separators.
#[derive(Default)]
pub struct CamelCaseProcedure;

impl Procedure for CamelCaseProcedure {
    fn invoke(&self, args: Arguments) -> Result<Yielded, ExecutionError> {
        let input = string_arg(self.name(), &args, STRING_ARG)?;
        let joined: String = input.split_whitespace().map(capitalize).collect();
        Ok(Yielded::Value(Value::String(joined)))
    }

    fn name(&self) -> &str {
        "camel_case"
    }
}
