// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use serde_json::Value;

use crate::config::consts::{
    BINDINGS_PATH, ENCRYPTION_PATH, INPUT_KEYS_PATH, LANGUAGE_PATH, LOCAL_LANGUAGE, NAME_PATH,
    OUTPUT_KEYS_PATH, PROCEDURE_PATH, QUEUE_PREFIX,
};
use crate::errors::ConfigError;
use crate::routing::{canonicalize, Pattern};
use crate::template::keypath;

/// Declarative description of one component.
///
/// The raw document is kept as-is: it is the `config` half of every record a
/// pipeline processes, so placeholders may reference any field in it, not
/// only the ones parsed here.
///
/// # Example
/// ```json
/// {
///   "name": "uppercase",
///   "shell": { "procedure": "change_text_case_upper" },
///   "input": {
///     "keys": ["text.~upper"],
///     "bindings": { "string": "{input.text}" }
///   },
///   "output": { "keys": ["upper.?"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    document: Value,
    name: String,
    input_patterns: Vec<Pattern>,
    output_keys: Vec<String>,
}

/// Settings for the decryption stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EncryptionSettings {
    /// Record path of the encrypted value, e.g. `input.payload.encrypted`.
    pub field: String,
    /// Symmetric key handed to the cipher.
    pub key: String,
}

impl Config {
    /// Wrap a component document, checking the fields routing depends on.
    ///
    /// `input.keys` and `output.keys` default to empty lists.
    pub fn from_value(document: Value) -> Result<Self, ConfigError> {
        if !document.is_object() {
            return Err(ConfigError::Invalid {
                reason: "component document must be an object".to_string(),
            });
        }

        let name = keypath::get(&document, NAME_PATH)
            .ok()
            .and_then(Value::as_str)
            .ok_or_else(|| ConfigError::Invalid {
                reason: "component 'name' must be a string".to_string(),
            })?
            .to_string();

        let input_keys = key_list(&document, &name, INPUT_KEYS_PATH)?;
        let output_keys = key_list(&document, &name, OUTPUT_KEYS_PATH)?;

        Ok(Self {
            input_patterns: input_keys.iter().map(|key| Pattern::parse(key)).collect(),
            output_keys,
            name,
            document,
        })
    }

    /// The declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical identity: the name's dot tokens deduplicated and sorted.
    pub fn identity(&self) -> String {
        canonicalize(&self.name)
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Look up any field of the document.
    pub fn get(&self, path: &str) -> Option<&Value> {
        keypath::get(&self.document, path).ok()
    }

    pub fn procedure(&self) -> Option<&str> {
        self.get(PROCEDURE_PATH).and_then(Value::as_str)
    }

    pub fn language(&self) -> &str {
        self.get(LANGUAGE_PATH)
            .and_then(Value::as_str)
            .unwrap_or(LOCAL_LANGUAGE)
    }

    pub fn input_patterns(&self) -> &[Pattern] {
        &self.input_patterns
    }

    pub fn output_keys(&self) -> &[String] {
        &self.output_keys
    }

    /// `input.bindings` as declared, if present. Shape is checked when a
    /// pipeline is built.
    pub fn bindings(&self) -> Option<&Value> {
        self.get(BINDINGS_PATH)
    }

    pub fn encryption(&self) -> Result<Option<EncryptionSettings>, ConfigError> {
        self.get(ENCRYPTION_PATH)
            .map(|value| {
                serde_json::from_value(value.clone()).map_err(|e| ConfigError::Invalid {
                    reason: format!("component '{}': {}: {}", self.name, ENCRYPTION_PATH, e),
                })
            })
            .transpose()
    }

    /// Name of the queue this component consumes from.
    pub fn queue_name(&self) -> String {
        format!("{}{}", QUEUE_PREFIX, self.name)
    }
}

fn key_list(document: &Value, name: &str, path: &str) -> Result<Vec<String>, ConfigError> {
    match keypath::get(document, path) {
        Err(_) => Ok(Vec::new()),
        Ok(value) => serde_json::from_value(value.clone()).map_err(|e| ConfigError::Invalid {
            reason: format!("component '{}': {} must be a list of strings: {}", name, path, e),
        }),
    }
}
