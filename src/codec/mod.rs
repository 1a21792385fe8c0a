// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Value codecs and the deep traversals that apply them.
//!
//! A [`Codec`] works on single values. The deep variants walk maps and
//! sequences and apply it to every leaf, leaving map keys and the container
//! shape intact.

mod base64_json;

pub use base64_json::Base64JsonCodec;

use serde_json::{Map, Value};

use crate::errors::CodecError;
use crate::traits::Codec;

/// Serialize every leaf of `value`.
pub fn deep_serialize(codec: &dyn Codec, value: &Value) -> Result<Value, CodecError> {
    traverse(value, &|leaf| codec.serialize(leaf))
}

/// Deserialize every leaf of `value`.
pub fn deep_deserialize(codec: &dyn Codec, value: &Value) -> Result<Value, CodecError> {
    traverse(value, &|leaf| codec.deserialize(leaf))
}

fn traverse<F>(value: &Value, leaf: &F) -> Result<Value, CodecError>
where
    F: Fn(&Value) -> Result<Value, CodecError>,
{
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, item)| Ok((key.clone(), traverse(item, leaf)?)))
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
        Value::Array(items) => items
            .iter()
            .map(|item| traverse(item, leaf))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => leaf(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Marks every leaf so traversal is visible.
    struct Tagging;

    impl Codec for Tagging {
        fn serialize(&self, value: &Value) -> Result<Value, CodecError> {
            Ok(json!(format!("<{}>", value)))
        }

        fn deserialize(&self, value: &Value) -> Result<Value, CodecError> {
            match value.as_str() {
                Some("bad") => Err(CodecError::Deserialize {
                    reason: "bad leaf".to_string(),
                }),
                _ => Ok(value.clone()),
            }
        }
    }

    #[test]
    fn test_deep_serialize_touches_leaves_only() {
        let value = json!({"a": [1, {"b": null}], "c": "x"});

        let result = deep_serialize(&Tagging, &value).unwrap();

        assert_eq!(
            result,
            json!({"a": ["<1>", {"b": "<null>"}], "c": "<\"x\">"})
        );
    }

    #[test]
    fn test_deep_deserialize_propagates_leaf_errors() {
        let value = json!({"ok": "fine", "nested": ["bad"]});

        assert!(matches!(
            deep_deserialize(&Tagging, &value),
            Err(CodecError::Deserialize { .. })
        ));
    }

    #[test]
    fn test_deep_round_trip_with_default_codec() {
        let codec = Base64JsonCodec;
        let value = json!({"text": "hello", "count": 3, "list": [true, null, 1.5]});

        let serialized = deep_serialize(&codec, &value).unwrap();
        assert_eq!(serialized, value);
        assert_eq!(deep_deserialize(&codec, &serialized).unwrap(), value);
    }
}
