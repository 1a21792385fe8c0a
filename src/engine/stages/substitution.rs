// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::engine::pipeline::{Chain, Records, Stage};
use crate::template::substitute;

/// Resolves placeholders in each record against the record itself, once on
/// the way in and again on the way out.
///
/// On the way in this is what turns `config.input.bindings` into concrete
/// arguments; on the way out it lets outputs reference the record.
pub struct SubstitutionStage;

fn resolve(record: Value) -> Value {
    substitute(&record, &record)
}

impl Stage for SubstitutionStage {
    fn name(&self) -> &'static str {
        "substitution"
    }

    fn process<'a>(&'a self, records: Records<'a>, inner: Chain<'a>) -> Records<'a> {
        let resolved = records.map(|record| record.map(resolve));
        Box::new(
            inner
                .run(Box::new(resolved))
                .map(|record| record.map(resolve)),
        )
    }
}
