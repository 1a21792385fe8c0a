// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::engine::pipeline::{Chain, Records, Stage};
use crate::errors::PipelineError;
use crate::observability::messages::pipeline::ProcedureFailed;
use crate::observability::messages::StructuredLog;

/// Outermost, optional stage: a procedure failure is logged and ends the
/// sequence. Validation and codec errors still reach the caller.
pub struct GuardStage {
    component: String,
}

impl GuardStage {
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
        }
    }
}

impl Stage for GuardStage {
    fn name(&self) -> &'static str {
        "guard"
    }

    fn process<'a>(&'a self, records: Records<'a>, inner: Chain<'a>) -> Records<'a> {
        Box::new(
            inner
                .run(records)
                .map_while(move |record| match record {
                    Err(PipelineError::Execution(error)) => {
                        ProcedureFailed {
                            component: &self.component,
                            error: &error,
                        }
                        .log();
                        None
                    }
                    other => Some(other),
                })
                .fuse(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::stages::testing::records;
    use crate::errors::{CodecError, ExecutionError};
    use serde_json::{json, Value};

    /// Replays a fixed list of results regardless of input.
    struct Scripted(Vec<Result<Value, PipelineError>>);

    impl Stage for Scripted {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn process<'a>(&'a self, _records: Records<'a>, _inner: Chain<'a>) -> Records<'a> {
            Box::new(self.0.clone().into_iter())
        }
    }

    fn run(script: Vec<Result<Value, PipelineError>>) -> Vec<Result<Value, PipelineError>> {
        let guard = GuardStage::new("c");
        let inner: Vec<Box<dyn Stage>> = vec![Box::new(Scripted(script))];
        guard.process(records(vec![]), Chain::new(&inner)).collect()
    }

    #[test]
    fn test_execution_error_ends_the_sequence() {
        let out = run(vec![
            Ok(json!(1)),
            Err(ExecutionError::new("p", "boom").into()),
            Ok(json!(2)),
        ]);

        assert_eq!(out, vec![Ok(json!(1))]);
    }

    #[test]
    fn test_other_errors_pass_through() {
        let codec_error: PipelineError = CodecError::Deserialize {
            reason: "bad".to_string(),
        }
        .into();

        let out = run(vec![Err(codec_error.clone()), Ok(json!(2))]);

        assert_eq!(out, vec![Err(codec_error), Ok(json!(2))]);
    }
}
