use async_trait::async_trait;
use serde_json::Value;

use crate::errors::TransportError;

/// A consumed message.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    /// The concrete key the message was published with.
    pub routing_key: String,
    pub payload: Value,
}

/// Topic-exchange style pub/sub.
///
/// Binding patterns use the wire encoding of [`crate::routing::topic_pattern`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Declare `queue` if needed and bind it to `pattern`.
    async fn bind(&self, queue: &str, pattern: &str) -> Result<(), TransportError>;

    async fn publish(&self, routing_key: &str, payload: Value) -> Result<(), TransportError>;

    /// Take the next message from `queue`, or `None` when it is empty.
    async fn consume(&self, queue: &str) -> Result<Option<Delivery>, TransportError>;
}
