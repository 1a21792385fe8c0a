// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::Config;
use crate::engine::pipeline::Pipeline;
use crate::errors::WorkerError;
use crate::observability::messages::transport::{
    DeliveryIgnored, DeliveryReceived, MessagePublished, QueueBound,
};
use crate::observability::messages::StructuredLog;
use crate::routing::{canonicalize, derive, topic_pattern, RoutingKey};
use crate::traits::{Delivery, Transport};

/// Wire patterns a component's queue is bound with, one per input pattern.
///
/// Negated tokens are left out; the exchange cannot express them.
pub fn queue_bindings(config: &Config) -> Vec<String> {
    config
        .input_patterns()
        .iter()
        .map(|pattern| topic_pattern(&pattern.binding_key()))
        .collect()
}

/// Runs one component against a transport.
///
/// The worker consumes from the component's queue, checks each delivery
/// against the input patterns (the exchange cannot express negations, so
/// this is where they apply), runs the pipeline and publishes every output
/// to every derived output key.
pub struct Worker {
    config: Config,
    pipeline: Pipeline,
    transport: Arc<dyn Transport>,
    queue: String,
}

impl Worker {
    pub fn new(config: Config, pipeline: Pipeline, transport: Arc<dyn Transport>) -> Self {
        let queue = config.queue_name();
        Self {
            config,
            pipeline,
            transport,
            queue,
        }
    }

    pub fn queue(&self) -> &str {
        &self.queue
    }

    pub fn bindings(&self) -> Vec<String> {
        queue_bindings(&self.config)
    }

    /// Declare the queue and bind it for every input pattern.
    pub async fn bind(&self) -> Result<(), WorkerError> {
        for pattern in self.bindings() {
            self.transport.bind(&self.queue, &pattern).await?;
            QueueBound {
                queue: &self.queue,
                pattern: &pattern,
            }
            .log();
        }
        Ok(())
    }

    /// Process one delivery and return how many messages were published.
    ///
    /// A delivery no input pattern accepts is ignored. The first matching
    /// pattern decides what the `?` tokens of the output keys expand to.
    pub async fn handle(&self, delivery: Delivery) -> Result<usize, WorkerError> {
        DeliveryReceived {
            queue: &self.queue,
            routing_key: &delivery.routing_key,
        }
        .log();

        let trigger = RoutingKey::parse(&delivery.routing_key);
        let Some(pattern) = self
            .config
            .input_patterns()
            .iter()
            .find(|pattern| pattern.matches(&trigger))
        else {
            DeliveryIgnored {
                component: self.config.name(),
                routing_key: &delivery.routing_key,
            }
            .log();
            return Ok(0);
        };

        let targets: Vec<String> = self
            .config
            .output_keys()
            .iter()
            .map(|output| canonicalize(&derive(output, &trigger, pattern)))
            .filter(|key| !key.is_empty())
            .collect();

        let mut published = 0;
        for output in self.pipeline.run_one(delivery.payload) {
            let output = output?;
            for routing_key in &targets {
                self.transport.publish(routing_key, output.clone()).await?;
                MessagePublished {
                    component: self.config.name(),
                    routing_key,
                }
                .log();
                published += 1;
            }
        }
        Ok(published)
    }

    /// Handle at most `limit` queued deliveries, stopping early once the
    /// queue is empty. Returns how many messages were published.
    ///
    /// A component whose output matches its own input keeps refilling its
    /// queue, so the caller always decides how much work one call does.
    pub async fn drain(&self, limit: usize) -> Result<usize, WorkerError> {
        let mut published = 0;
        for _ in 0..limit {
            let Some(delivery) = self.transport.consume(&self.queue).await? else {
                break;
            };
            published += self.handle(delivery).await?;
        }
        Ok(published)
    }
}
