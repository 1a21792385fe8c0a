// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod change_text_case;
pub mod concatenate;
pub mod reverse_text;
pub mod split_lines;
pub mod word_case;

pub use change_text_case::*;
pub use concatenate::*;
pub use reverse_text::*;
pub use split_lines::*;
pub use word_case::*;

use crate::errors::ExecutionError;
use crate::traits::Arguments;

/// Argument the text procedures read their input from.
pub const STRING_ARG: &str = "string";

/// Fetch a required string argument.
pub(crate) fn string_arg<'a>(
    procedure: &str,
    args: &'a Arguments,
    name: &str,
) -> Result<&'a str, ExecutionError> {
    match args.get(name) {
        Some(value) => value.as_str().ok_or_else(|| {
            ExecutionError::new(procedure, format!("argument '{}' must be a string", name))
        }),
        None => Err(ExecutionError::new(
            procedure,
            format!("missing argument '{}'", name),
        )),
    }
}
