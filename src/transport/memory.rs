// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use tokio::sync::Mutex;

use crate::errors::TransportError;
use crate::routing::topic_matches;
use crate::traits::{Delivery, Transport};

#[derive(Default)]
struct Queue {
    patterns: Vec<String>,
    messages: VecDeque<Delivery>,
}

/// In-memory topic exchange.
///
/// A published message is copied once into every queue with at least one
/// matching binding pattern. Messages with no matching queue are dropped, as
/// a broker would.
#[derive(Default)]
pub struct MemoryTransport {
    queues: Mutex<HashMap<String, Queue>>,
    published: Mutex<Vec<Delivery>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message published so far, in order.
    pub async fn published(&self) -> Vec<Delivery> {
        self.published.lock().await.clone()
    }

    /// Number of messages waiting in `queue`.
    pub async fn pending(&self, queue: &str) -> usize {
        self.queues
            .lock()
            .await
            .get(queue)
            .map_or(0, |queue| queue.messages.len())
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn bind(&self, queue: &str, pattern: &str) -> Result<(), TransportError> {
        let mut queues = self.queues.lock().await;
        let entry = queues.entry(queue.to_string()).or_default();
        if !entry.patterns.iter().any(|existing| existing == pattern) {
            entry.patterns.push(pattern.to_string());
        }
        Ok(())
    }

    async fn publish(&self, routing_key: &str, payload: Value) -> Result<(), TransportError> {
        let delivery = Delivery {
            routing_key: routing_key.to_string(),
            payload,
        };

        let mut queues = self.queues.lock().await;
        for queue in queues.values_mut() {
            if queue
                .patterns
                .iter()
                .any(|pattern| topic_matches(pattern, routing_key))
            {
                queue.messages.push_back(delivery.clone());
            }
        }
        drop(queues);

        self.published.lock().await.push(delivery);
        Ok(())
    }

    async fn consume(&self, queue: &str) -> Result<Option<Delivery>, TransportError> {
        let mut queues = self.queues.lock().await;
        let queue = queues
            .get_mut(queue)
            .ok_or_else(|| TransportError::UnknownQueue {
                queue: queue.to_string(),
            })?;
        Ok(queue.messages.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_publish_routes_to_matching_queues() {
        let transport = MemoryTransport::new();
        transport.bind("q-upper", "#.text.#").await.unwrap();
        transport.bind("q-audit", "#").await.unwrap();
        transport.bind("q-other", "#.image.#").await.unwrap();

        transport.publish("en.text", json!("hi")).await.unwrap();

        assert_eq!(transport.pending("q-upper").await, 1);
        assert_eq!(transport.pending("q-audit").await, 1);
        assert_eq!(transport.pending("q-other").await, 0);

        let delivery = transport.consume("q-upper").await.unwrap().unwrap();
        assert_eq!(delivery.routing_key, "en.text");
        assert_eq!(delivery.payload, json!("hi"));
        assert!(transport.consume("q-upper").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_queue_with_several_bindings_receives_one_copy() {
        let transport = MemoryTransport::new();
        transport.bind("q", "#.a.#").await.unwrap();
        transport.bind("q", "#.b.#").await.unwrap();
        transport.bind("q", "#.a.#").await.unwrap();

        transport.publish("a.b", json!(1)).await.unwrap();

        assert_eq!(transport.pending("q").await, 1);
    }

    #[tokio::test]
    async fn test_consume_unknown_queue_fails() {
        let transport = MemoryTransport::new();
        assert_eq!(
            transport.consume("missing").await,
            Err(TransportError::UnknownQueue {
                queue: "missing".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_unrouted_messages_are_still_recorded() {
        let transport = MemoryTransport::new();
        transport.publish("nowhere", json!(null)).await.unwrap();
        assert_eq!(transport.published().await.len(), 1);
    }
}
