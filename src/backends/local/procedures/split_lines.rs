// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use super::{string_arg, STRING_ARG};
use crate::errors::ExecutionError;
use crate::traits::{Arguments, Procedure, Yielded};

/// Streams the lines of `string`, one output per line.
#[derive(Default)]
pub struct SplitLinesProcedure;

impl Procedure for SplitLinesProcedure {
    fn invoke(&self, args: Arguments) -> Result<Yielded, ExecutionError> {
        let text = string_arg(self.name(), &args, STRING_ARG)?.to_string();
        Ok(Yielded::Stream(Box::new(
            Lines { text, position: 0 }.map(|line| Ok(Value::String(line))),
        )))
    }

    fn name(&self) -> &str {
        "split_lines"
    }
}

/// Owning line iterator; each line is cut only when requested.
struct Lines {
    text: String,
    position: usize,
}

impl Iterator for Lines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let rest = self.text.get(self.position..).filter(|rest| !rest.is_empty())?;
        let (line, consumed) = match rest.find('\n') {
            Some(end) => (&rest[..end], end + 1),
            None => (rest, rest.len()),
        };
        let line = line.strip_suffix('\r').unwrap_or(line).to_string();
        self.position += consumed;
        Some(line)
    }
}
