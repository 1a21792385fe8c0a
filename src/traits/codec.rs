use serde_json::Value;

use crate::errors::CodecError;

/// Turns individual values into transport-safe leaves and back.
///
/// Implementations must round-trip: `deserialize(serialize(v)) == v`.
/// JSON primitives may pass through unchanged.
pub trait Codec: Send + Sync {
    fn serialize(&self, value: &Value) -> Result<Value, CodecError>;

    fn deserialize(&self, value: &Value) -> Result<Value, CodecError>;
}

/// Symmetric decryption of a single field.
pub trait Cipher: Send + Sync {
    /// Decrypt `blob` with `key`, returning the plaintext. The error is a
    /// human-readable reason.
    fn decrypt(&self, blob: &str, key: &str) -> Result<String, String>;
}
