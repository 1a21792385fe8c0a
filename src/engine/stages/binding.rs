// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::sync::Arc;

use crate::config::consts::{RECORD_BINDINGS_PATH, RECORD_OUTPUT};
use crate::engine::pipeline::{kind_of, Chain, Records, Stage};
use crate::errors::{PipelineError, ValidationError};
use crate::observability::messages::pipeline::ProcedureInvoked;
use crate::observability::messages::StructuredLog;
use crate::template::keypath;
use crate::traits::{Arguments, Procedure};

/// Innermost stage: invokes the procedure with the record's bindings as
/// named arguments and emits one record per produced value, with the value
/// stored under `output`.
///
/// Bindings are read from `config.input.bindings` as they stand when the
/// record arrives; substitution has already happened further out. Missing
/// bindings mean no arguments. The procedure runs only when the first of its
/// outputs is pulled.
pub struct BindingStage {
    component: String,
    procedure: Arc<dyn Procedure>,
}

impl BindingStage {
    pub fn new(component: &str, procedure: Arc<dyn Procedure>) -> Self {
        Self {
            component: component.to_string(),
            procedure,
        }
    }

    fn arguments(&self, record: &Value) -> Result<Arguments, ValidationError> {
        match keypath::get(record, RECORD_BINDINGS_PATH) {
            Err(_) => Ok(Arguments::new()),
            Ok(Value::Object(bindings)) => Ok(bindings.clone()),
            Ok(other) => Err(ValidationError::MalformedBindings {
                component: self.component.clone(),
                found: kind_of(other).to_string(),
            }),
        }
    }

    fn invoke(
        &self,
        record: Value,
    ) -> Result<impl Iterator<Item = Result<Value, PipelineError>> + Send, PipelineError> {
        let args = self.arguments(&record)?;

        ProcedureInvoked {
            procedure: self.procedure.name(),
            argument_count: args.len(),
        }
        .log();

        let stream = self.procedure.invoke(args)?.into_stream();
        Ok(stream.map(move |produced| {
            let value = produced?;
            let mut record = record.clone();
            if let Some(fields) = record.as_object_mut() {
                fields.insert(RECORD_OUTPUT.to_string(), value);
            }
            Ok(record)
        }))
    }
}

impl Stage for BindingStage {
    fn name(&self) -> &'static str {
        "binding"
    }

    fn process<'a>(&'a self, records: Records<'a>, inner: Chain<'a>) -> Records<'a> {
        let outputs = records.flat_map(move |record| -> Records<'a> {
            match record.and_then(|record| self.invoke(record)) {
                Ok(outputs) => Box::new(outputs),
                Err(error) => Box::new(std::iter::once(Err(error))),
            }
        });
        inner.run(Box::new(outputs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::{CountingProcedure, FailingProcedure};
    use crate::engine::stages::testing::{collect, records};
    use crate::errors::ExecutionError;
    use crate::traits::{procedure_fn, Yielded};
    use serde_json::json;
    use std::sync::atomic::Ordering;

    fn record(bindings: Value) -> Value {
        json!({"config": {"input": {"bindings": bindings}}, "input": {}})
    }

    #[test]
    fn test_each_produced_value_becomes_a_record() {
        let pair = procedure_fn("pair", |args: Arguments| {
            let x = args.get("x").cloned().unwrap_or(Value::Null);
            Ok(Yielded::Stream(Box::new(
                vec![Ok::<_, ExecutionError>(x.clone()), Ok(x)].into_iter(),
            )))
        });
        let stage = BindingStage::new("pair", Arc::new(pair));

        let out = collect(stage.process(records(vec![record(json!({"x": 3}))]), Chain::empty())).unwrap();

        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r["output"] == json!(3)));
    }

    #[test]
    fn test_non_map_bindings_are_a_validation_error() {
        let stage = BindingStage::new("c", Arc::new(CountingProcedure::new()));

        let result = collect(stage.process(records(vec![record(json!("x"))]), Chain::empty()));

        assert_eq!(
            result,
            Err(PipelineError::Validation(ValidationError::MalformedBindings {
                component: "c".to_string(),
                found: "string".to_string(),
            }))
        );
    }

    #[test]
    fn test_missing_bindings_mean_no_arguments() {
        let seen = procedure_fn("count", |args: Arguments| Ok(Yielded::Value(json!(args.len()))));
        let stage = BindingStage::new("c", Arc::new(seen));

        let out = collect(stage.process(records(vec![json!({"input": 1})]), Chain::empty())).unwrap();

        assert_eq!(out[0]["output"], json!(0));
    }

    #[test]
    fn test_procedure_not_invoked_until_pulled() {
        let procedure = Arc::new(CountingProcedure::new());
        let stage = BindingStage::new("c", procedure.clone());

        let mut outputs = stage.process(
            records(vec![record(json!({})), record(json!({}))]),
            Chain::empty(),
        );
        assert_eq!(procedure.calls.load(Ordering::SeqCst), 0);

        outputs.next();
        assert_eq!(procedure.calls.load(Ordering::SeqCst), 1);

        drop(outputs);
        assert_eq!(procedure.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_execution_errors_are_yielded() {
        let stage = BindingStage::new("c", Arc::new(FailingProcedure));

        let result = collect(stage.process(records(vec![record(json!({}))]), Chain::empty()));

        assert_eq!(
            result,
            Err(PipelineError::Execution(ExecutionError::new(
                "failing",
                "simulated procedure failure"
            )))
        );
    }
}
