// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use super::{string_arg, STRING_ARG};
use crate::errors::ExecutionError;
use crate::traits::{Arguments, Procedure, Yielded};

/// Reverse Text procedure - reverses `string` by characters
#[derive(Default)]
pub struct ReverseTextProcedure;

impl ReverseTextProcedure {
    pub fn new() -> Self {
        Self
    }
}

impl Procedure for ReverseTextProcedure {
    fn invoke(&self, args: Arguments) -> Result<Yielded, ExecutionError> {
        let input = string_arg(self.name(), &args, STRING_ARG)?;
        Ok(Yielded::Value(Value::String(input.chars().rev().collect())))
    }

    fn name(&self) -> &str {
        "reverse_text"
    }
}
