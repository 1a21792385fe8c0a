// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for queue bindings, deliveries and publishing.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A queue was bound to a topic pattern.
///
/// # Log Level
/// `info!` - Important operational event
pub struct QueueBound<'a> {
    pub queue: &'a str,
    pub pattern: &'a str,
}

impl Display for QueueBound<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Queue '{}' bound to '{}'", self.queue, self.pattern)
    }
}

impl StructuredLog for QueueBound<'_> {
    fn log(&self) {
        tracing::info!(queue = self.queue, pattern = self.pattern, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "queue_bound",
            span_name = name,
            queue = self.queue,
            pattern = self.pattern,
        )
    }
}

/// A delivery was taken from a queue.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use switchyard::observability::messages::transport::DeliveryReceived;
///
/// let msg = DeliveryReceived {
///     queue: "q-uppercase",
///     routing_key: "text.user",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct DeliveryReceived<'a> {
    pub queue: &'a str,
    pub routing_key: &'a str,
}

impl Display for DeliveryReceived<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Received message on '{}' with routing key '{}'",
            self.queue, self.routing_key
        )
    }
}

impl StructuredLog for DeliveryReceived<'_> {
    fn log(&self) {
        tracing::info!(queue = self.queue, routing_key = self.routing_key, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "delivery",
            span_name = name,
            queue = self.queue,
            routing_key = self.routing_key,
        )
    }
}

/// A delivery matched the queue binding but none of the component's patterns.
///
/// # Log Level
/// `debug!` - Routing detail
pub struct DeliveryIgnored<'a> {
    pub component: &'a str,
    pub routing_key: &'a str,
}

impl Display for DeliveryIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Component '{}' ignores routing key '{}'",
            self.component, self.routing_key
        )
    }
}

impl StructuredLog for DeliveryIgnored<'_> {
    fn log(&self) {
        tracing::debug!(component = self.component, routing_key = self.routing_key, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "delivery_ignored",
            span_name = name,
            component = self.component,
            routing_key = self.routing_key,
        )
    }
}

/// An output was published.
///
/// # Log Level
/// `info!` - Important operational event
pub struct MessagePublished<'a> {
    pub component: &'a str,
    pub routing_key: &'a str,
}

impl Display for MessagePublished<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Component '{}' published with routing key '{}'",
            self.component, self.routing_key
        )
    }
}

impl StructuredLog for MessagePublished<'_> {
    fn log(&self) {
        tracing::info!(component = self.component, routing_key = self.routing_key, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "message_published",
            span_name = name,
            component = self.component,
            routing_key = self.routing_key,
        )
    }
}
