// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::errors::ExecutionError;
use crate::traits::{Arguments, Procedure, Yielded};

pub const STRING_LIST_ARG: &str = "string_list";
pub const DELIMITER_ARG: &str = "delimiter";
pub const DEFAULT_DELIMITER: &str = "\n";

/// Joins `string_list` with `delimiter` (a newline unless given).
#[derive(Default)]
pub struct ConcatenateProcedure;

impl ConcatenateProcedure {
    fn fail(&self, message: impl Into<String>) -> ExecutionError {
        ExecutionError::new(self.name(), message)
    }
}

impl Procedure for ConcatenateProcedure {
    fn invoke(&self, args: Arguments) -> Result<Yielded, ExecutionError> {
        let items = args
            .get(STRING_LIST_ARG)
            .and_then(Value::as_array)
            .ok_or_else(|| self.fail(format!("argument '{}' must be a list", STRING_LIST_ARG)))?;

        let delimiter = match args.get(DELIMITER_ARG) {
            None => DEFAULT_DELIMITER,
            Some(value) => value
                .as_str()
                .ok_or_else(|| self.fail(format!("argument '{}' must be a string", DELIMITER_ARG)))?,
        };

        let parts = items
            .iter()
            .map(|item| {
                item.as_str()
                    .ok_or_else(|| self.fail(format!("'{}' items must be strings", STRING_LIST_ARG)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Yielded::Value(Value::String(parts.join(delimiter))))
    }

    fn name(&self) -> &str {
        "concatenate"
    }
}
