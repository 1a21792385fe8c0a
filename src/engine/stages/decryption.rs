// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::sync::Arc;

use crate::config::EncryptionSettings;
use crate::engine::pipeline::{kind_of, Chain, Records, Stage};
use crate::errors::{CodecError, PipelineError};
use crate::observability::messages::pipeline::EncryptedFieldAbsent;
use crate::observability::messages::StructuredLog;
use crate::template::keypath;
use crate::traits::Cipher;

/// Replaces the configured encrypted field with its plaintext before the
/// record goes inward. Outputs are not re-encrypted.
///
/// A record without the field passes through; a field that is present but
/// not a string, or that the cipher rejects, is a [`CodecError`].
pub struct DecryptionStage {
    component: String,
    decryption: Option<(EncryptionSettings, Arc<dyn Cipher>)>,
}

impl DecryptionStage {
    pub fn new(component: &str, decryption: Option<(EncryptionSettings, Arc<dyn Cipher>)>) -> Self {
        Self {
            component: component.to_string(),
            decryption,
        }
    }

    fn decrypt(&self, mut record: Value) -> Result<Value, PipelineError> {
        let Some((settings, cipher)) = &self.decryption else {
            return Ok(record);
        };

        let failure = |reason: String| CodecError::Decrypt {
            field: settings.field.clone(),
            reason,
        };

        let blob = match keypath::get(&record, &settings.field) {
            Err(_) => {
                EncryptedFieldAbsent {
                    component: &self.component,
                    field: &settings.field,
                }
                .log();
                return Ok(record);
            }
            Ok(Value::String(blob)) => blob.clone(),
            Ok(other) => {
                return Err(failure(format!("expected a string, found {}", kind_of(other))).into())
            }
        };

        let plaintext = cipher.decrypt(&blob, &settings.key).map_err(failure)?;
        keypath::set(&mut record, &settings.field, Value::String(plaintext))
            .map_err(|e| failure(e.to_string()))?;
        Ok(record)
    }
}

impl Stage for DecryptionStage {
    fn name(&self) -> &'static str {
        "decryption"
    }

    fn process<'a>(&'a self, records: Records<'a>, inner: Chain<'a>) -> Records<'a> {
        inner.run(Box::new(
            records.map(move |record| record.and_then(|record| self.decrypt(record))),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::stages::testing::{collect, records};
    use serde_json::json;

    /// Reverses the text; rejects blobs not wrapped in the key.
    struct ReversingCipher;

    impl Cipher for ReversingCipher {
        fn decrypt(&self, blob: &str, key: &str) -> Result<String, String> {
            blob.strip_prefix(key)
                .map(|rest| rest.chars().rev().collect())
                .ok_or_else(|| "wrong key".to_string())
        }
    }

    fn stage() -> DecryptionStage {
        DecryptionStage::new(
            "secret",
            Some((
                EncryptionSettings {
                    field: "input.payload.encrypted".to_string(),
                    key: "k1:".to_string(),
                },
                Arc::new(ReversingCipher),
            )),
        )
    }

    #[test]
    fn test_decrypts_field_in_place() {
        let input = json!({"input": {"payload": {"encrypted": "k1:terces", "other": 1}}});

        let out = collect(stage().process(records(vec![input]), Chain::empty())).unwrap();

        assert_eq!(
            out,
            vec![json!({"input": {"payload": {"encrypted": "secret", "other": 1}}})]
        );
    }

    #[test]
    fn test_absent_field_is_a_no_op() {
        let input = json!({"input": {"payload": {}}});

        let out = collect(stage().process(records(vec![input.clone()]), Chain::empty())).unwrap();

        assert_eq!(out, vec![input]);
    }

    #[test]
    fn test_present_but_undecryptable_fields_fail() {
        let cases = vec![
            json!({"input": {"payload": {"encrypted": "k2:terces"}}}),
            json!({"input": {"payload": {"encrypted": 42}}}),
        ];

        for input in cases {
            let result = collect(stage().process(records(vec![input.clone()]), Chain::empty()));
            assert!(
                matches!(result, Err(PipelineError::Codec(CodecError::Decrypt { .. }))),
                "{}",
                input
            );
        }
    }

    #[test]
    fn test_without_settings_records_pass_through() {
        let stage = DecryptionStage::new("plain", None);
        let input = json!({"input": {"payload": {"encrypted": 42}}});

        let out = collect(stage.process(records(vec![input.clone()]), Chain::empty())).unwrap();

        assert_eq!(out, vec![input]);
    }
}
