// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::Value;

use crate::config::consts::SERIALIZED_PREFIX;
use crate::errors::CodecError;
use crate::traits::Codec;

/// Default codec: JSON primitives pass through, everything else becomes a
/// `base64:` token wrapping its compact JSON.
///
/// Strings that already start with the token prefix are encoded too, so a
/// literal `"base64:..."` string survives a round trip.
///
/// # Example
/// ```
/// use serde_json::json;
/// use switchyard::codec::Base64JsonCodec;
/// use switchyard::traits::Codec;
///
/// let codec = Base64JsonCodec;
/// let token = codec.serialize(&json!({"k": 1})).unwrap();
/// assert!(token.as_str().unwrap().starts_with("base64:"));
/// assert_eq!(codec.deserialize(&token).unwrap(), json!({"k": 1}));
/// assert_eq!(codec.serialize(&json!(42)).unwrap(), json!(42));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64JsonCodec;

impl Base64JsonCodec {
    fn encode(value: &Value) -> Result<Value, CodecError> {
        let json = serde_json::to_vec(value).map_err(|e| CodecError::Serialize {
            reason: e.to_string(),
        })?;
        Ok(Value::String(format!(
            "{}{}",
            SERIALIZED_PREFIX,
            BASE64.encode(json)
        )))
    }

    fn decode(token: &str) -> Result<Value, CodecError> {
        let bytes = BASE64.decode(token).map_err(|e| CodecError::Deserialize {
            reason: format!("invalid base64 token: {}", e),
        })?;
        serde_json::from_slice(&bytes).map_err(|e| CodecError::Deserialize {
            reason: format!("invalid token payload: {}", e),
        })
    }
}

impl Codec for Base64JsonCodec {
    fn serialize(&self, value: &Value) -> Result<Value, CodecError> {
        match value {
            Value::String(text) if text.starts_with(SERIALIZED_PREFIX) => Self::encode(value),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                Ok(value.clone())
            }
            Value::Array(_) | Value::Object(_) => Self::encode(value),
        }
    }

    fn deserialize(&self, value: &Value) -> Result<Value, CodecError> {
        match value.as_str().and_then(|text| text.strip_prefix(SERIALIZED_PREFIX)) {
            Some(token) => Self::decode(token),
            None => Ok(value.clone()),
        }
    }
}
