// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::sync::Arc;

use crate::backends::local::LocalProcedureFactory;
use crate::codec::Base64JsonCodec;
use crate::config::consts::LOCAL_LANGUAGE;
use crate::config::Config;
use crate::engine::stages::{
    BindingStage, ContextStage, DecryptionStage, DeserializationStage, GuardStage,
    SubstitutionStage,
};
use crate::errors::{PipelineError, ValidationError};
use crate::observability::messages::pipeline::PipelineStarted;
use crate::observability::messages::StructuredLog;
use crate::traits::{Cipher, Codec, Procedure};

/// A lazy sequence of records flowing between stages.
pub type Records<'a> = Box<dyn Iterator<Item = Result<Value, PipelineError>> + Send + 'a>;

/// One layer of the execution chain.
///
/// A stage receives the records heading inward and the chain of stages
/// beneath it. It transforms records on the way in, hands them to `inner`,
/// and transforms what comes back on the way out. Nothing runs until the
/// returned sequence is pulled.
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;

    fn process<'a>(&'a self, records: Records<'a>, inner: Chain<'a>) -> Records<'a>;
}

/// The stages beneath the one currently processing.
#[derive(Clone, Copy)]
pub struct Chain<'a> {
    stages: &'a [Box<dyn Stage>],
}

impl<'a> Chain<'a> {
    pub fn new(stages: &'a [Box<dyn Stage>]) -> Self {
        Self { stages }
    }

    /// A chain with no stages; records pass through untouched.
    pub fn empty() -> Self {
        Self { stages: &[] }
    }

    pub fn run(self, records: Records<'a>) -> Records<'a> {
        match self.stages.split_first() {
            Some((stage, rest)) => stage.process(records, Chain::new(rest)),
            None => records,
        }
    }
}

/// A component's procedure wrapped in its stages.
pub struct Pipeline {
    component: String,
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Run every input through the stages.
    ///
    /// The returned sequence is lazy: no input is decrypted, decoded or
    /// handed to the procedure until an output is pulled, and dropping the
    /// sequence early stops all further work.
    pub fn run<'a, I>(&'a self, inputs: I) -> Records<'a>
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: Send + 'a,
    {
        PipelineStarted {
            component: &self.component,
            stage_count: self.stages.len(),
        }
        .log();

        Chain::new(&self.stages).run(Box::new(inputs.into_iter().map(Ok)))
    }

    pub fn run_one(&self, input: Value) -> Records<'_> {
        self.run(std::iter::once(input))
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    /// Stage names, outermost first.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }
}

/// Assembles and validates a [`Pipeline`] for one component.
///
/// Without an explicit procedure the builder resolves `shell.procedure`
/// through the local backend. The default codec is [`Base64JsonCodec`].
///
/// # Example
/// ```
/// use serde_json::json;
/// use switchyard::config::Config;
/// use switchyard::engine::PipelineBuilder;
///
/// let config = Config::from_value(json!({
///     "name": "upper",
///     "shell": {"procedure": "change_text_case_upper"},
///     "input": {"bindings": {"string": "{input.text}"}}
/// })).unwrap();
///
/// let pipeline = PipelineBuilder::new(config).build().unwrap();
/// let outputs: Vec<_> = pipeline
///     .run_one(json!({"text": "hello"}))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(outputs, vec![json!("HELLO")]);
/// ```
pub struct PipelineBuilder {
    config: Config,
    procedure: Option<Arc<dyn Procedure>>,
    codec: Arc<dyn Codec>,
    cipher: Option<Arc<dyn Cipher>>,
    guarded: bool,
}

impl PipelineBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            procedure: None,
            codec: Arc::new(Base64JsonCodec),
            cipher: None,
            guarded: false,
        }
    }

    /// Use this procedure instead of resolving `shell.procedure`.
    pub fn procedure(mut self, procedure: Arc<dyn Procedure>) -> Self {
        self.procedure = Some(procedure);
        self
    }

    pub fn codec(mut self, codec: Arc<dyn Codec>) -> Self {
        self.codec = codec;
        self
    }

    pub fn cipher(mut self, cipher: Arc<dyn Cipher>) -> Self {
        self.cipher = Some(cipher);
        self
    }

    /// Add the outermost guard stage, which ends the sequence on the first
    /// procedure failure instead of yielding the error.
    pub fn guarded(mut self, guarded: bool) -> Self {
        self.guarded = guarded;
        self
    }

    pub fn build(self) -> Result<Pipeline, ValidationError> {
        let component = self.config.name().to_string();

        if let Some(bindings) = self.config.bindings() {
            if !bindings.is_object() {
                return Err(ValidationError::MalformedBindings {
                    component,
                    found: kind_of(bindings).to_string(),
                });
            }
        }

        let procedure = match self.procedure {
            Some(procedure) => procedure,
            None => resolve_procedure(&self.config)?,
        };

        let encryption =
            self.config
                .encryption()
                .map_err(|e| ValidationError::MalformedEncryption {
                    component: component.clone(),
                    reason: e.to_string(),
                })?;
        let decryption = match (encryption, self.cipher) {
            (Some(settings), Some(cipher)) => {
                DecryptionStage::new(&component, Some((settings, cipher)))
            }
            (Some(_), None) => return Err(ValidationError::MissingCipher { component }),
            (None, _) => DecryptionStage::new(&component, None),
        };

        let mut stages: Vec<Box<dyn Stage>> = Vec::new();
        if self.guarded {
            stages.push(Box::new(GuardStage::new(&component)));
        }
        stages.push(Box::new(ContextStage::new(self.config.document().clone())));
        stages.push(Box::new(decryption));
        stages.push(Box::new(DeserializationStage::new(self.codec)));
        stages.push(Box::new(SubstitutionStage));
        stages.push(Box::new(BindingStage::new(&component, procedure)));

        Ok(Pipeline { component, stages })
    }
}

fn resolve_procedure(config: &Config) -> Result<Arc<dyn Procedure>, ValidationError> {
    let component = config.name().to_string();

    let language = config.language();
    if language != LOCAL_LANGUAGE {
        return Err(ValidationError::UnsupportedLanguage {
            component,
            language: language.to_string(),
        });
    }

    let name = config
        .procedure()
        .ok_or_else(|| ValidationError::MissingProcedure {
            component: component.clone(),
        })?;

    LocalProcedureFactory::create_procedure(name).ok_or_else(|| {
        ValidationError::UnknownProcedure {
            component,
            procedure: name.to_string(),
        }
    })
}

/// JSON type name, for error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "map",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{procedure_fn, Arguments, Yielded};
    use serde_json::json;

    fn config(document: Value) -> Config {
        Config::from_value(document).unwrap()
    }

    #[test]
    fn test_chain_without_stages_is_identity() {
        let records: Records = Box::new(vec![Ok(json!(1)), Ok(json!(2))].into_iter());
        let out: Vec<_> = Chain::empty().run(records).map(Result::unwrap).collect();
        assert_eq!(out, vec![json!(1), json!(2)]);
    }

    #[test]
    fn test_stage_order() {
        let pipeline = PipelineBuilder::new(config(json!({
            "name": "upper",
            "shell": {"procedure": "change_text_case_upper"}
        })))
        .guarded(true)
        .build()
        .unwrap();

        assert_eq!(
            pipeline.stage_names(),
            vec![
                "guard",
                "context",
                "decryption",
                "deserialization",
                "substitution",
                "binding"
            ]
        );
    }

    #[test]
    fn test_build_validation_errors() {
        let cases = vec![
            (
                json!({"name": "c", "shell": {"procedure": "reverse_text"}, "input": {"bindings": ["x"]}}),
                ValidationError::MalformedBindings {
                    component: "c".to_string(),
                    found: "array".to_string(),
                },
            ),
            (
                json!({"name": "c"}),
                ValidationError::MissingProcedure {
                    component: "c".to_string(),
                },
            ),
            (
                json!({"name": "c", "shell": {"procedure": "nope"}}),
                ValidationError::UnknownProcedure {
                    component: "c".to_string(),
                    procedure: "nope".to_string(),
                },
            ),
            (
                json!({"name": "c", "shell": {"procedure": "reverse_text", "language": "python"}}),
                ValidationError::UnsupportedLanguage {
                    component: "c".to_string(),
                    language: "python".to_string(),
                },
            ),
            (
                json!({"name": "c", "shell": {"procedure": "reverse_text"},
                       "encryption": {"field": "input.secret", "key": "k"}}),
                ValidationError::MissingCipher {
                    component: "c".to_string(),
                },
            ),
        ];

        for (document, expected) in cases {
            match PipelineBuilder::new(config(document)).build() {
                Err(error) => assert_eq!(error, expected),
                Ok(_) => panic!("expected {:?}", expected),
            }
        }
    }

    #[test]
    fn test_malformed_encryption_is_rejected() {
        let result = PipelineBuilder::new(config(json!({
            "name": "c",
            "shell": {"procedure": "reverse_text"},
            "encryption": "yes"
        })))
        .build();

        assert!(matches!(
            result,
            Err(ValidationError::MalformedEncryption { .. })
        ));
    }

    #[test]
    fn test_explicit_procedure_skips_lookup() {
        let echo = procedure_fn("echo", |args: Arguments| Ok(Yielded::Value(Value::Object(args))));
        let pipeline = PipelineBuilder::new(config(json!({
            "name": "echo",
            "input": {"bindings": {"v": "{input}"}}
        })))
        .procedure(Arc::new(echo))
        .build()
        .unwrap();

        let out: Vec<_> = pipeline
            .run_one(json!({"a": 1}))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(out, vec![json!({"v": {"a": 1}})]);
    }
}
