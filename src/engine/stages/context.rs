// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{Map, Value};

use crate::config::consts::{RECORD_CONFIG, RECORD_INPUT, RECORD_OUTPUT};
use crate::engine::pipeline::{Chain, Records, Stage};

/// Wraps each raw input as `{config, input}` and unwraps `output` on the
/// way out. A record without an `output` unwraps to `null`.
pub struct ContextStage {
    config: Value,
}

impl ContextStage {
    pub fn new(config: Value) -> Self {
        Self { config }
    }

    fn wrap(&self, input: Value) -> Value {
        let mut record = Map::new();
        record.insert(RECORD_CONFIG.to_string(), self.config.clone());
        record.insert(RECORD_INPUT.to_string(), input);
        Value::Object(record)
    }
}

fn unwrap_output(record: Value) -> Value {
    match record {
        Value::Object(mut map) => map.remove(RECORD_OUTPUT).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}

impl Stage for ContextStage {
    fn name(&self) -> &'static str {
        "context"
    }

    fn process<'a>(&'a self, records: Records<'a>, inner: Chain<'a>) -> Records<'a> {
        let wrapped = records.map(move |input| input.map(|input| self.wrap(input)));
        Box::new(
            inner
                .run(Box::new(wrapped))
                .map(|record| record.map(unwrap_output)),
        )
    }
}
