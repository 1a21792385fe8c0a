// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::sync::Arc;

use crate::codec::{deep_deserialize, deep_serialize};
use crate::config::consts::{RECORD_INPUT, RECORD_OUTPUT};
use crate::engine::pipeline::{Chain, Records, Stage};
use crate::errors::PipelineError;
use crate::traits::Codec;

/// Decodes the leaves of `input` before invocation and encodes the leaves of
/// `output` after it.
pub struct DeserializationStage {
    codec: Arc<dyn Codec>,
}

impl DeserializationStage {
    pub fn new(codec: Arc<dyn Codec>) -> Self {
        Self { codec }
    }

    fn decode_input(&self, mut record: Value) -> Result<Value, PipelineError> {
        if let Some(input) = record.get_mut(RECORD_INPUT) {
            *input = deep_deserialize(self.codec.as_ref(), input)?;
        }
        Ok(record)
    }

    fn encode_output(&self, mut record: Value) -> Result<Value, PipelineError> {
        if let Some(output) = record.get_mut(RECORD_OUTPUT) {
            *output = deep_serialize(self.codec.as_ref(), output)?;
        }
        Ok(record)
    }
}

impl Stage for DeserializationStage {
    fn name(&self) -> &'static str {
        "deserialization"
    }

    fn process<'a>(&'a self, records: Records<'a>, inner: Chain<'a>) -> Records<'a> {
        let decoded = records.map(move |record| record.and_then(|record| self.decode_input(record)));
        Box::new(
            inner
                .run(Box::new(decoded))
                .map(move |record| record.and_then(|record| self.encode_output(record))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Base64JsonCodec;
    use crate::engine::stages::testing::{collect, records, Echo};
    use crate::errors::CodecError;
    use serde_json::json;

    fn stage() -> DeserializationStage {
        DeserializationStage::new(Arc::new(Base64JsonCodec))
    }

    #[test]
    fn test_input_decoded_and_output_encoded() {
        let stage = stage();
        let inner: Vec<Box<dyn Stage>> = vec![Box::new(Echo)];
        // base64 of {"k":1}
        let input = json!({"input": {"plain": "x", "packed": "base64:eyJrIjoxfQ=="}});

        let out = collect(stage.process(records(vec![input]), Chain::new(&inner))).unwrap();

        // Echo copied the decoded input; the nested map is a container, so it
        // stays a map and only its leaves are encoded.
        assert_eq!(out[0]["output"], json!({"plain": "x", "packed": {"k": 1}}));
        assert_eq!(out[0]["input"], json!({"plain": "x", "packed": {"k": 1}}));
    }

    #[test]
    fn test_corrupt_input_token_fails() {
        let input = json!({"input": {"packed": "base64:%%%"}});

        let result = collect(stage().process(records(vec![input]), Chain::empty()));

        assert!(matches!(
            result,
            Err(PipelineError::Codec(CodecError::Deserialize { .. }))
        ));
    }

    #[test]
    fn test_records_without_fields_pass_through() {
        let out = collect(stage().process(records(vec![json!({})]), Chain::empty())).unwrap();
        assert_eq!(out, vec![json!({})]);
    }
}
