// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ExecutionError;
use crate::traits::{Arguments, Procedure, Yielded};

/// A procedure that counts its invocations and returns the running count
pub struct CountingProcedure {
    pub calls: AtomicUsize,
}

impl CountingProcedure {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

impl Procedure for CountingProcedure {
    fn invoke(&self, _args: Arguments) -> Result<Yielded, ExecutionError> {
        let count = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Yielded::Value(json!(count)))
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// A procedure that always fails for testing failure scenarios
pub struct FailingProcedure;

impl Procedure for FailingProcedure {
    fn invoke(&self, _args: Arguments) -> Result<Yielded, ExecutionError> {
        Err(ExecutionError::new(self.name(), "simulated procedure failure"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// A procedure whose stream yields its values, then fails
pub struct FailingStreamProcedure {
    pub values: Vec<Value>,
}

impl Procedure for FailingStreamProcedure {
    fn invoke(&self, _args: Arguments) -> Result<Yielded, ExecutionError> {
        let failure = ExecutionError::new(self.name(), "stream interrupted");
        let items = self
            .values
            .clone()
            .into_iter()
            .map(Ok)
            .chain(std::iter::once(Err(failure)));
        Ok(Yielded::Stream(Box::new(items)))
    }

    fn name(&self) -> &str {
        "failing_stream"
    }
}

/// Adds one to the numeric argument `x`
pub struct AddOneProcedure;

impl Procedure for AddOneProcedure {
    fn invoke(&self, args: Arguments) -> Result<Yielded, ExecutionError> {
        args.get("x")
            .and_then(Value::as_i64)
            .map(|x| Yielded::Value(json!(x + 1)))
            .ok_or_else(|| ExecutionError::new(self.name(), "argument 'x' must be an integer"))
    }

    fn name(&self) -> &str {
        "add_one"
    }
}
